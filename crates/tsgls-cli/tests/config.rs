use super::*;
use clap::Parser;

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["tsgls"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).unwrap()
}

#[test]
fn test_parse_camel_case_keys() {
    let file = ConfigFile::parse(
        r#"{ "baseDirectory": "src/", "outputNamespace": "Gls", "indentUnit": "\t", "failOnComplaints": true }"#,
    )
    .unwrap();
    assert_eq!(file.base_directory.as_deref(), Some("src/"));
    assert_eq!(file.output_namespace.as_deref(), Some("Gls"));
    assert_eq!(file.indent_unit.as_deref(), Some("\t"));
    assert_eq!(file.fail_on_complaints, Some(true));
    assert_eq!(file.skip_comments, None);
}

#[test]
fn test_unknown_keys_are_rejected() {
    assert!(ConfigFile::parse(r#"{ "outDir": "x" }"#).is_err());
}

#[test]
fn test_defaults_without_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let resolved = resolve_config(&args(&["doc.tsgls.json"]), dir.path()).unwrap();
    assert_eq!(resolved.options, TransformOptions::default());
    assert_eq!(resolved.catalog.len(), CommandCatalog::builtin().len());
    assert!(!resolved.fail_on_complaints);
}

#[test]
fn test_flags_override_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        r#"{ "skipComments": true, "indentUnit": "\t", "outputNamespace": "Gls" }"#,
    )
    .unwrap();

    let resolved = resolve_config(
        &args(&["--include-comments", "--indent", "2", "doc.tsgls.json"]),
        dir.path(),
    )
    .unwrap();
    assert!(!resolved.options.skip_comments);
    assert_eq!(resolved.options.indent_unit, "  ");
    assert_eq!(resolved.options.output_namespace, "Gls");
}

#[test]
fn test_config_beside_input_directory() {
    let dir = tempfile::tempdir().unwrap();
    let project = dir.path().join("project");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(project.join(CONFIG_FILE_NAME), r#"{ "failOnComplaints": true }"#).unwrap();

    let found = find_config(&args(&["project"]), dir.path());
    assert_eq!(found, Some(project.join(CONFIG_FILE_NAME)));
    let resolved = resolve_config(&args(&["project"]), dir.path()).unwrap();
    assert!(resolved.fail_on_complaints);
}

#[test]
fn test_external_catalog_relative_to_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("commands.json"),
        r#"{ "commands": { "class start": { "indentation": [1] }, "class end": { "indentation": [-1] } } }"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("custom.json"),
        r#"{ "commandCatalog": "commands.json" }"#,
    )
    .unwrap();

    let resolved =
        resolve_config(&args(&["--config", "custom.json", "doc.tsgls.json"]), dir.path()).unwrap();
    assert_eq!(resolved.catalog.len(), 2);
    assert!(resolved.catalog.contains("class start"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = resolve_config(&args(&["--config", "nope.json", "doc.tsgls.json"]), dir.path())
        .unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}
