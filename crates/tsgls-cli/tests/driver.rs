use super::*;
use tsgls_ir::CommandCatalog;
use tsgls_syntax::{ClassData, ModifierFlags, NodeData, SyntaxKind, TreeBuilder, TypeTable, ValueDeclData};
use tsgls_transform::TransformOptions;

fn point_document(file_name: &str) -> SourceDocument {
    let mut b = TreeBuilder::new();
    let mark = b.mark();
    b.text("class");
    let name = b.identifier("Point");
    b.text("{");
    let member_mark = b.mark();
    let x = b.identifier("x");
    b.text("=");
    let one = b.numeric_literal("1");
    b.text(";");
    let member = b.finish(
        member_mark,
        SyntaxKind::PropertyDeclaration,
        NodeData::ValueDecl(ValueDeclData {
            name: x,
            type_annotation: None,
            initializer: Some(one),
        }),
    );
    b.set_modifiers(member, ModifierFlags::PUBLIC);
    b.text("}");
    let class = b.finish(
        mark,
        SyntaxKind::ClassDeclaration,
        NodeData::Class(ClassData {
            name: Some(name),
            heritage_clauses: Vec::new(),
            members: vec![member],
        }),
    );
    let root = b.finish_from(class, SyntaxKind::SourceFile, NodeData::List(vec![class]));
    SourceDocument::new(file_name, b.into_arena(), root, TypeTable::new())
}

fn config(base: &str, namespace: &str) -> ResolvedConfig {
    ResolvedConfig {
        options: TransformOptions {
            base_directory: base.to_string(),
            output_namespace: namespace.to_string(),
            ..TransformOptions::default()
        },
        catalog: CommandCatalog::builtin().clone(),
        fail_on_complaints: false,
    }
}

fn write_document(dir: &Path, relative: &str, document: &SourceDocument) -> PathBuf {
    let path = dir.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, document.to_json().unwrap()).unwrap();
    path
}

#[test]
fn test_collect_inputs_walks_directories() {
    let dir = tempfile::tempdir().unwrap();
    let doc = point_document("src/point.ts");
    let nested = write_document(dir.path(), "docs/shapes/point.tsgls.json", &doc);
    let top = write_document(dir.path(), "docs/a.tsgls.json", &doc);
    std::fs::write(dir.path().join("docs/readme.json"), "{}").unwrap();

    let files = collect_inputs(&[PathBuf::from("docs"), top.clone()], dir.path()).unwrap();
    assert_eq!(files, vec![top, nested]);
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = collect_inputs(&[PathBuf::from("absent.tsgls.json")], dir.path()).unwrap_err();
    assert!(err.to_string().contains("input not found"));
}

#[test]
fn test_transform_and_write_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_document(
        dir.path(),
        "point.tsgls.json",
        &point_document("src/shapes/point.ts"),
    );
    let config = config("src/", "Gls");

    let results = transform_all(&[input], &config).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].display_name(), "src/shapes/point.ts");

    let out_dir = dir.path().join("out");
    let written = write_outputs(&results, &config, &out_dir).unwrap();
    assert_eq!(written, vec![out_dir.join("Gls/shapes/point.gls")]);
    let text = std::fs::read_to_string(&written[0]).unwrap();
    assert_eq!(
        text,
        "class start : Point\n    member variable : public x 1\nclass end\n"
    );
}

#[test]
fn test_output_file_without_recorded_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_document(dir.path(), "point.tsgls.json", &point_document(""));
    let config = config("", "");
    let result = transform_file(&input, &config).unwrap();
    assert_eq!(
        output_file(&result, &config, Path::new("out")),
        Path::new("out").join("point.gls")
    );
}

#[test]
fn test_invalid_document_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.tsgls.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = transform_file(&path, &config("", "")).unwrap_err();
    assert!(format!("{err:#}").contains("broken.tsgls.json"));
}

#[test]
fn test_parent_segments_stay_inside_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_document(dir.path(), "escape.tsgls.json", &point_document("../../x.ts"));
    let config = config("", "");
    let result = transform_file(&input, &config).unwrap();
    let out_dir = dir.path().join("out");

    let path = output_file(&result, &config, &out_dir);
    assert_eq!(path, out_dir.join("x.gls"));
    let written = write_outputs(&[result], &config, &out_dir).unwrap();
    assert!(written[0].starts_with(&out_dir));
    assert!(written[0].exists());
}
