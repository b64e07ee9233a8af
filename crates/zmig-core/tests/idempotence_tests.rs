//! A second migration pass over migrated output must find nothing to do.

use std::fs;

use zmig_core::{MigrationOptions, Migrator, SourceKind, migrate_source};

const FIXTURES: &[(&str, &str)] = &[
    (
        "openapi_calls",
        r#"import { z } from 'zod';
import { extendZodWithOpenApi } from 'zod-openapi';

extendZodWithOpenApi(z);

export const Id = z.string().openapi({ ref: 'Id', refType: 'input' });
export const Choice = z.union([z.string(), z.number()]).openapi({
  unionOneOf: true,
  description: 'X',
});
"#,
    ),
    (
        "factories",
        r#"import * as z from 'zod';
import 'zod-openapi/extend';
import { createDocument, createSchema } from 'zod-openapi';

export const doc = createDocument(
  { openapi: '3.1.0', info: { title: 'A', version: '1' } },
  { unionOneOf: true, defaultDateSchema: { type: 'string', format: 'date' } },
);

export const schema = createSchema(z.string(), {
  schemaType: 'input',
  componentRefPath: '#/definitions/',
  components: {},
  opts: { custom: true },
  unionOneOf: true,
});
"#,
    ),
    (
        "effect_type",
        r#"import z from 'zod';

export const Trimmed = z.string().transform((s) => s.trim()).openapi({
  effectType: 'input',
  description: 'trimmed',
});
"#,
    ),
    (
        "annotated_types",
        r#"import type { ZodOpenApiParameterObject } from 'zod-openapi';

const param: ZodOpenApiParameterObject = {
  ref: 'limit',
  in: 'query',
  name: 'limit',
  examples: [{ ref: 'literal data' }],
};
"#,
    ),
];

#[test]
fn second_pass_over_migrated_source_is_a_no_op() {
    for (name, source) in FIXTURES {
        let first = migrate_source(source, SourceKind::Ts).expect("fixture parses");
        assert!(first.is_modified(), "{name}: first pass should migrate");
        let migrated = first.output.expect("migrated output");

        let second = migrate_source(&migrated, SourceKind::Ts)
            .unwrap_or_else(|err| panic!("{name}: migrated output must parse: {err}\n{migrated}"));
        assert!(
            !second.is_modified(),
            "{name}: second pass changed {:?}\n{migrated}",
            second.changes.nonzero().collect::<Vec<_>>()
        );
        assert!(second.output.is_none());
    }
}

#[test]
fn second_run_over_a_tree_modifies_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    for (name, source) in FIXTURES {
        fs::write(dir.path().join(format!("{name}.ts")), source).expect("write fixture");
    }
    let pattern = dir.path().to_string_lossy().into_owned();

    let first = Migrator::new(MigrationOptions::default())
        .migrate(&pattern)
        .expect("first run");
    assert_eq!(first.files_processed, FIXTURES.len());
    assert_eq!(first.files_modified, FIXTURES.len());

    let snapshot: Vec<String> = FIXTURES
        .iter()
        .map(|(name, _)| {
            fs::read_to_string(dir.path().join(format!("{name}.ts"))).expect("read migrated")
        })
        .collect();

    let second = Migrator::new(MigrationOptions::default())
        .migrate(&pattern)
        .expect("second run");
    assert_eq!(second.files_processed, FIXTURES.len());
    assert_eq!(second.files_modified, 0);
    assert_eq!(second.totals.total(), 0);

    for ((name, _), before) in FIXTURES.iter().zip(&snapshot) {
        let after = fs::read_to_string(dir.path().join(format!("{name}.ts"))).expect("read");
        assert_eq!(&after, before, "{name} was rewritten on the second run");
    }
}
