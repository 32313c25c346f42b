//! Runs the `tsgls` binary against documents written to a temp directory.

use std::path::Path;
use std::process::{Command, Output};
use tsgls_syntax::{
    FunctionData, NodeData, NodeIndex, SourceDocument, SyntaxKind, TreeBuilder, TypeTable,
};

/// `// greeting` then `function greet() {}` followed by `value.trim();`
/// where `value` is a string.
fn sample_document() -> SourceDocument {
    let mut b = TreeBuilder::new();
    b.comment("// greeting");
    let fn_mark = b.mark();
    b.text("function");
    let name = b.identifier("greet");
    b.text("()");
    let body_mark = b.mark();
    b.text("{}");
    let body = b.finish(body_mark, SyntaxKind::Block, NodeData::List(Vec::new()));
    let function = b.finish(
        fn_mark,
        SyntaxKind::FunctionDeclaration,
        NodeData::Function(FunctionData {
            name: Some(name),
            parameters: Vec::new(),
            type_annotation: None,
            body: Some(body),
        }),
    );
    b.newline();

    let receiver = b.identifier("value");
    b.text(".");
    let method = b.identifier("trim");
    let callee = b.finish_from(
        receiver,
        SyntaxKind::PropertyAccessExpression,
        NodeData::Access(tsgls_syntax::AccessData {
            expression: receiver,
            name_or_argument: method,
        }),
    );
    b.text("()");
    let call = b.finish_from(
        callee,
        SyntaxKind::CallExpression,
        NodeData::Call(tsgls_syntax::CallData {
            expression: callee,
            type_arguments: Vec::new(),
            arguments: Vec::new(),
        }),
    );
    b.text(";");
    let statement = b.finish_from(
        call,
        SyntaxKind::ExpressionStatement,
        NodeData::Wrapped(Some(call)),
    );
    let root: NodeIndex = b.finish_from(
        function,
        SyntaxKind::SourceFile,
        NodeData::List(vec![function, statement]),
    );

    let mut types = TypeTable::new();
    let string = types.add_intrinsic(tsgls_syntax::TypeFlags::STRING, "string");
    types.set_node_type(receiver, string);
    SourceDocument::new("src/greet.ts", b.into_arena(), root, types)
}

fn write_sample(dir: &Path) {
    let docs = dir.join("docs");
    std::fs::create_dir_all(&docs).unwrap();
    std::fs::write(
        docs.join("greet.tsgls.json"),
        sample_document().to_json().unwrap(),
    )
    .unwrap();
}

fn tsgls(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tsgls"))
        .args(args)
        .current_dir(dir)
        .env_remove("TSGLS_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("tsgls runs")
}

#[test]
fn test_prints_gls_and_reports_complaints() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(dir.path());

    let output = tsgls(dir.path(), &["docs"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "string trim : value\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("src/greet.ts(2,1): unsupported: function declaration is not supported"));
}

#[test]
fn test_fail_on_complaints_sets_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(dir.path());

    let output = tsgls(dir.path(), &["--fail-on-complaints", "docs"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_out_dir_with_config_and_comments() {
    let dir = tempfile::tempdir().unwrap();
    write_sample(dir.path());
    std::fs::write(
        dir.path().join("tsgls.json"),
        r#"{ "baseDirectory": "src/", "outputNamespace": "Gls" }"#,
    )
    .unwrap();

    let output = tsgls(
        dir.path(),
        &["-o", "out", "--include-comments", "--format", "json", "docs"],
    );
    assert!(output.status.success());

    let written = dir.path().join("out/Gls/greet.gls");
    let text = std::fs::read_to_string(&written).unwrap();
    assert_eq!(text, "string trim : value\ncomment line : greeting\n");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("greet.gls"));
    assert!(stdout.contains("\"reason\": \"function declaration is not supported\""));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = tsgls(dir.path(), &["absent.tsgls.json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("input not found"));
}
