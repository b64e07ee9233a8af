//! End-to-end runs over temporary source trees.

use std::fs;
use std::path::{Path, PathBuf};

use zmig_core::{FileOutcome, MigrationOptions, Migrator, Rule, SourceKind, migrate_source};

const LEGACY: &str = r#"import { z } from "zod";
import { extendZodWithOpenApi, createDocument, ZodOpenApiResponseObject } from "zod-openapi";

extendZodWithOpenApi(z);

const userSchema = z
  .object({
    id: z.string().openapi({ description: "User ID" }),
    name: z.string().openapi({
      description: "User name",
      param: { ref: "userNameParam" },
    }),
    metadata: z.object({
      ref: z.string(),
    }),
  })
  .openapi({ ref: "User" });

const response: ZodOpenApiResponseObject = {
  description: "User response",
  ref: "UserResponse",
};

export const document = createDocument(
  {
    openapi: "3.1.0",
    info: { title: "API", version: "1.0.0" },
    components: { schemas: { User: { ref: "UserComponent" } } },
  },
  {
    unionOneOf: true,
    defaultDateSchema: { type: "string", format: "date" },
  },
);

export { userSchema, response };
"#;

const CLEAN: &str = r#"import * as z from "zod/v4";

export const Name = z.string().meta({ description: "name" });
"#;

fn write(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(&path, contents).expect("write fixture");
    path
}

fn pattern(root: &Path) -> String {
    root.to_string_lossy().into_owned()
}

#[test]
fn migrates_a_legacy_file_in_place() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write(dir.path(), "src/api.ts", LEGACY);

    let result = Migrator::new(MigrationOptions::default())
        .migrate(&pattern(dir.path()))
        .expect("migration runs");

    assert_eq!(result.files_processed, 1);
    assert_eq!(result.files_modified, 1);
    assert_eq!(result.get(Rule::ImportsRemoved), 1);
    assert_eq!(result.get(Rule::ExtendCallsRemoved), 1);
    assert_eq!(result.get(Rule::ZodImportsMigrated), 1);
    assert_eq!(result.get(Rule::OpenapiToMeta), 3);
    assert_eq!(result.get(Rule::RefToId), 4);
    assert_eq!(result.get(Rule::CreateDocumentUnionOneOfToOverride), 1);
    assert_eq!(result.get(Rule::DefaultDateSchemaToOverride), 1);

    let out = fs::read_to_string(&file).expect("read migrated file");
    assert!(out.contains("import * as z from \"zod/v4\";"), "{out}");
    assert!(!out.contains("extendZodWithOpenApi"), "{out}");
    assert!(out.contains("createDocument, ZodOpenApiResponseObject"), "{out}");
    assert!(!out.contains(".openapi("), "{out}");
    assert!(out.contains("id: \"User\""), "{out}");
    assert!(out.contains("id: \"UserResponse\""), "{out}");
    assert!(out.contains("ref: z.string()"), "{out}");
    assert!(out.contains("def.type === \"union\""), "{out}");
    assert!(out.contains("jsonSchema.format = \"date\";"), "{out}");

    let stats = &result.files[0];
    assert_eq!(stats.path, file);
    assert_eq!(stats.outcome, FileOutcome::Modified);
}

#[test]
fn dry_run_counts_without_writing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write(dir.path(), "api.ts", LEGACY);

    let options = MigrationOptions::default().with_dry_run(true);
    let result = Migrator::new(options)
        .migrate(&pattern(dir.path()))
        .expect("migration runs");

    assert_eq!(result.files_modified, 1);
    assert!(result.totals.has_changes());
    assert_eq!(result.files[0].outcome, FileOutcome::Modified);
    assert_eq!(fs::read_to_string(&file).expect("read file"), LEGACY);
}

#[test]
fn clean_files_are_processed_but_not_modified() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "clean.ts", CLEAN);
    write(dir.path(), "empty.ts", "");
    write(dir.path(), "comments.js", "// nothing here\n/* or here */\n");

    let result = Migrator::new(MigrationOptions::default())
        .migrate(&pattern(dir.path()))
        .expect("migration runs");

    assert_eq!(result.files_processed, 3);
    assert_eq!(result.files_modified, 0);
    assert_eq!(result.totals.total(), 0);
    assert!(result.files.iter().all(|stats| stats.outcome == FileOutcome::Unchanged));
    assert_eq!(fs::read_to_string(dir.path().join("clean.ts")).expect("read"), CLEAN);
    assert_eq!(fs::read_to_string(dir.path().join("empty.ts")).expect("read"), "");
}

#[test]
fn malformed_files_are_skipped_and_the_run_continues() {
    let dir = tempfile::tempdir().expect("temp dir");
    let broken_source = "import { z } from 'zod';\nconst a = z.string().openapi({ ref: 'A' ;\n";
    let broken = write(dir.path(), "a_broken.ts", broken_source);
    write(dir.path(), "b_legacy.ts", LEGACY);

    let result = Migrator::new(MigrationOptions::default())
        .migrate(&pattern(dir.path()))
        .expect("a bad file does not fail the run");

    assert_eq!(result.files_processed, 2);
    assert_eq!(result.files_modified, 1);
    match &result.files[0].outcome {
        FileOutcome::Skipped { reason } => assert!(reason.contains("parse error"), "{reason}"),
        other => panic!("expected skipped, got {other:?}"),
    }
    assert!(!result.files[0].changes.has_changes());
    assert_eq!(fs::read_to_string(&broken).expect("read"), broken_source);
}

#[test]
fn only_eligible_extensions_are_processed() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "a.ts", LEGACY);
    write(dir.path(), "b.mjs", LEGACY);
    write(dir.path(), "c.json", "{}");
    write(dir.path(), "d.md", "# extendZodWithOpenApi");

    let result = Migrator::new(MigrationOptions::default())
        .migrate(&pattern(dir.path()))
        .expect("migration runs");

    assert_eq!(result.files_processed, 1);
    assert_eq!(fs::read_to_string(dir.path().join("b.mjs")).expect("read"), LEGACY);
}

#[test]
fn default_and_user_ignores_are_honored() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "src/a.ts", LEGACY);
    write(dir.path(), "node_modules/lib/index.ts", LEGACY);
    write(dir.path(), "coverage/report.js", "extendZodWithOpenApi(z);\n");
    write(dir.path(), "src/legacy/keep.ts", LEGACY);

    let options = MigrationOptions::default().with_ignore(["**/legacy/**"]);
    let result = Migrator::new(options)
        .migrate(&format!("{}/**/*", dir.path().display()))
        .expect("migration runs");

    assert_eq!(result.files_processed, 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("node_modules/lib/index.ts")).expect("read"),
        LEGACY
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("src/legacy/keep.ts")).expect("read"),
        LEGACY
    );
}

#[test]
fn no_matches_is_an_empty_result() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Migrator::new(MigrationOptions::default())
        .migrate(&format!("{}/**/*.ts", dir.path().display()))
        .expect("empty discovery is not an error");
    assert_eq!(result.files_processed, 0);
    assert_eq!(result.files_modified, 0);
    assert_eq!(result.totals.total(), 0);
    assert!(result.files.is_empty());
}

#[test]
fn invalid_pattern_fails_the_run() {
    let err = Migrator::new(MigrationOptions::default())
        .migrate("src/[oops.ts")
        .expect_err("invalid glob is fatal");
    assert!(format!("{err:#}").contains("invalid glob pattern"), "{err:#}");
}

#[test]
fn effect_type_is_annotated_in_printed_output() {
    let source = r#"export const Date = z.string().openapi({
  description: "A date",
  effectType: "input",
});
"#;
    let migration = migrate_source(source, SourceKind::Ts).expect("valid source");
    assert_eq!(migration.changes.get(Rule::EffectTypeCommented), 1);
    let out = migration.output.expect("modified output");
    assert!(out.contains("// effectType: \"input\""), "{out}");
    assert_eq!(out.matches("// TODO: effectType was removed").count(), 1, "{out}");
    assert!(out.contains("// See: https://zod.dev/v4?id=overwrite"), "{out}");
}

#[test]
fn result_serializes_with_flat_counters() {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "api.ts", LEGACY);
    let result = Migrator::new(MigrationOptions::default().with_dry_run(true))
        .migrate(&pattern(dir.path()))
        .expect("migration runs");

    let json = serde_json::to_value(&result).expect("result serializes");
    assert_eq!(json["filesProcessed"], 1);
    assert_eq!(json["filesModified"], 1);
    assert_eq!(json["extendCallsRemoved"], 1);
    assert_eq!(json["refToIdChanges"], 4);
    assert_eq!(json["files"][0]["outcome"]["status"], "modified");
    assert_eq!(json["files"][0]["changes"]["zodImportsMigrated"], 1);
}
