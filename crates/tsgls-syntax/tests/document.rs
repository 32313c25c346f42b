use super::*;
use crate::{NodeData, SyntaxKind, TreeBuilder, TypeFlags, TypeQuery};

#[test]
fn test_document_json_restores_parents() {
    let mut b = TreeBuilder::new();
    let mark = b.mark();
    let literal = b.string_literal("'hi'");
    let statement = b.finish(
        mark,
        SyntaxKind::ExpressionStatement,
        NodeData::Wrapped(Some(literal)),
    );
    let root = b.finish(mark, SyntaxKind::SourceFile, NodeData::List(vec![statement]));
    let mut types = TypeTable::new();
    let string = types.add_intrinsic(TypeFlags::STRING, "string");
    types.set_node_type(literal, string);

    let mut document = SourceDocument::new("hello.ts", b.into_arena(), root, types);
    for node in &mut document.arena.nodes {
        node.parent = None;
    }
    let json = document.to_json().unwrap();
    assert!(json.contains("\"fileName\": \"hello.ts\""));

    let decoded = SourceDocument::from_json(&json).unwrap();
    assert_eq!(decoded.root, root);
    assert_eq!(decoded.arena.parent(literal), Some(statement));
    assert_eq!(decoded.types.type_at_node(literal), Some(string));
}

#[test]
fn test_document_types_default_to_empty() {
    let json = r#"{
        "fileName": "empty.ts",
        "arena": { "source_text": "", "nodes": [ { "kind": "SourceFile", "pos": 0, "end": 0, "data": { "List": [] } } ] },
        "root": 0
    }"#;
    let document = SourceDocument::from_json(json).unwrap();
    assert_eq!(document.arena.len(), 1);
    assert!(document.types.types.is_empty());
}
