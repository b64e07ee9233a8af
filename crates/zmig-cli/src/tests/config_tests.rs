use clap::Parser;
use tempfile::TempDir;

use crate::args::CliArgs;
use crate::config::{FileConfig, load_config, options_from_args, parse_config, resolve_options};

fn args(extra: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(
        ["zod-openapi-migrate", "src"]
            .into_iter()
            .chain(extra.iter().copied()),
    )
    .unwrap()
}

#[test]
fn parses_camel_case_keys() {
    let config = parse_config(
        r#"{ "ignorePatterns": ["**/generated/**"], "dryRun": true, "verbose": false }"#,
    )
    .unwrap();
    assert_eq!(config.ignore_patterns, vec!["**/generated/**"]);
    assert_eq!(config.dry_run, Some(true));
    assert_eq!(config.verbose, Some(false));
}

#[test]
fn empty_object_is_valid() {
    assert_eq!(parse_config("{}").unwrap(), FileConfig::default());
}

#[test]
fn malformed_json_is_an_error() {
    let err = parse_config(r#"{ "dryRun": }"#).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config JSON"));
}

#[test]
fn wrong_value_type_is_an_error() {
    assert!(parse_config(r#"{ "ignorePatterns": "dist/**" }"#).is_err());
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    let err = load_config(&path).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

#[test]
fn file_values_apply_without_flags() {
    let file = FileConfig {
        ignore_patterns: vec!["legacy/**".to_string()],
        dry_run: Some(true),
        verbose: Some(true),
    };
    let options = resolve_options(&args(&[]), Some(file));
    assert!(options.dry_run);
    assert!(options.verbose);
    assert_eq!(options.ignore_patterns, vec!["legacy/**"]);
}

#[test]
fn flags_win_and_ignores_concatenate() {
    let file = FileConfig {
        ignore_patterns: vec!["legacy/**".to_string()],
        dry_run: Some(false),
        verbose: None,
    };
    let options = resolve_options(&args(&["-d", "--ignore", "**/*.spec.ts"]), Some(file));
    assert!(options.dry_run);
    assert!(!options.verbose);
    assert_eq!(options.ignore_patterns, vec!["legacy/**", "**/*.spec.ts"]);
}

#[test]
fn no_config_file_uses_flags_only() {
    let options = options_from_args(&args(&["--verbose"])).unwrap();
    assert!(options.verbose);
    assert!(!options.dry_run);
    assert!(options.ignore_patterns.is_empty());
}

#[test]
fn loads_config_named_on_the_command_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("zmig.json");
    std::fs::write(&path, r#"{ "dryRun": true, "ignorePatterns": ["a/**"] }"#).unwrap();

    let path = path.to_string_lossy().into_owned();
    let options = options_from_args(&args(&["--config", &path])).unwrap();
    assert!(options.dry_run);
    assert_eq!(options.ignore_patterns, vec!["a/**"]);
}
