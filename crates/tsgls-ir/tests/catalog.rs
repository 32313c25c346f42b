use super::*;

#[test]
fn test_builtin_covers_every_emitted_command() {
    let catalog = CommandCatalog::builtin();
    for (name, _) in BUILTIN_COMMANDS {
        assert!(catalog.contains(name), "{name}");
    }
    assert_eq!(catalog.len(), BUILTIN_COMMANDS.len());
}

#[test]
fn test_builtin_blocks_are_balanced() {
    let catalog = CommandCatalog::builtin();
    let net = |names: &[&str]| -> i32 {
        names
            .iter()
            .flat_map(|name| catalog.indentation(name).unwrap().iter().copied())
            .sum()
    };
    assert_eq!(net(&[CLASS_START, CLASS_END]), 0);
    assert_eq!(net(&[INTERFACE_START, INTERFACE_END]), 0);
    assert_eq!(net(&[IF_START, ELSE_IF_START, ELSE_START, IF_END]), 0);
    assert_eq!(net(&[FOR_NUMBERS_START, FOR_NUMBERS_END]), 0);
    assert_eq!(catalog.indentation(ELSE_START), Some(&[-1, 1][..]));
}

#[test]
fn test_unknown_command_has_no_metadata() {
    assert_eq!(CommandCatalog::builtin().indentation("not a command"), None);
}

#[test]
fn test_from_json() {
    let catalog = CommandCatalog::from_json(
        r#"{ "commands": { "block start": { "indentation": [1] }, "print line": {} } }"#,
    )
    .unwrap();
    assert_eq!(catalog.indentation("block start"), Some(&[1][..]));
    assert_eq!(catalog.indentation("print line"), Some(&[][..]));
    let names: Vec<_> = catalog.commands.keys().cloned().collect();
    assert_eq!(names, ["block start", "print line"]);
}

#[test]
fn test_from_json_rejects_invalid_catalogs() {
    let err = CommandCatalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));

    let err =
        CommandCatalog::from_json(r#"{ "commands": { "x": { "indentation": [0] } } }"#).unwrap_err();
    assert!(err.to_string().contains("non-zero"));
}
