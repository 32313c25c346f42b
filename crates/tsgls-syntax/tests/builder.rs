use super::*;

#[test]
fn test_builder_spans_index_generated_text() {
    let mut b = TreeBuilder::new();
    let receiver = b.identifier("s");
    b.text(".");
    let method = b.identifier("indexOf");
    let access = b.finish_from(
        receiver,
        SyntaxKind::PropertyAccessExpression,
        NodeData::Access(AccessData {
            expression: receiver,
            name_or_argument: method,
        }),
    );
    b.text("(");
    let argument = b.string_literal("\"x\"");
    b.text(")");
    let call = b.finish_from(
        access,
        SyntaxKind::CallExpression,
        NodeData::Call(CallData {
            expression: access,
            type_arguments: Vec::new(),
            arguments: vec![argument],
        }),
    );
    let arena = b.into_arena();
    assert_eq!(arena.source_text, "s.indexOf(\"x\")");
    assert_eq!(arena.node_text(access), "s.indexOf");
    assert_eq!(arena.node_text(call), "s.indexOf(\"x\")");
    assert_eq!(arena.parent(argument), Some(call));
}

#[test]
fn test_builder_marks_cover_keywords() {
    let mut b = TreeBuilder::new();
    let mark = b.mark();
    b.text("class");
    let name = b.identifier("Point");
    b.text("{");
    let member_mark = b.mark();
    b.text("public");
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
    let arena = b.into_arena();
    assert_eq!(arena.node_text(class), "class Point { public x = 1; }");
    assert_eq!(arena.node_text(member), "public x = 1;");
    assert_eq!(arena.modifiers(member), ModifierFlags::PUBLIC);
}

#[test]
fn test_raw_type_and_tokens() {
    let mut b = TreeBuilder::new();
    let ty = b.raw_type(SyntaxKind::TypeReference, "Map<string, number>");
    let keyword = b.token(SyntaxKind::NullKeyword);
    let arena = b.arena();
    assert_eq!(arena.node_text(ty), "Map<string, number>");
    assert_eq!(arena.node_text(keyword), "null");
    assert_eq!(arena.kind(ty), Some(SyntaxKind::TypeReference));
}
