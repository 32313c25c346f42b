use super::*;
use tsgls_syntax::{AccessData, BinaryData, TreeBuilder, UnaryData, ValueDeclData};

struct Fixture {
    arena: NodeArena,
    root: NodeIndex,
    increment: NodeIndex,
    assignment: NodeIndex,
}

/// `let i = 0; i++; x = i; obj.i;`
fn fixture() -> Fixture {
    let mut b = TreeBuilder::new();
    let decl_mark = b.mark();
    b.text("let");
    let name = b.identifier("i");
    b.text("=");
    let zero = b.numeric_literal("0");
    let declaration = b.finish(
        decl_mark,
        SyntaxKind::VariableDeclaration,
        NodeData::ValueDecl(ValueDeclData {
            name,
            type_annotation: None,
            initializer: Some(zero),
        }),
    );
    b.text(";");

    let operand = b.identifier("i");
    b.text("++");
    let increment = b.finish_from(
        operand,
        SyntaxKind::PostfixUnaryExpression,
        NodeData::Unary(UnaryData {
            operator: SyntaxKind::PlusPlusToken,
            operand,
        }),
    );
    b.text(";");

    let target = b.identifier("x");
    b.text("=");
    let source = b.identifier("i");
    let assignment = b.finish_from(
        target,
        SyntaxKind::BinaryExpression,
        NodeData::Binary(BinaryData {
            left: target,
            operator: SyntaxKind::EqualsToken,
            right: source,
        }),
    );
    b.text(";");

    let receiver = b.identifier("obj");
    b.text(".");
    let member = b.identifier("i");
    let access = b.finish_from(
        receiver,
        SyntaxKind::PropertyAccessExpression,
        NodeData::Access(AccessData {
            expression: receiver,
            name_or_argument: member,
        }),
    );
    b.text(";");

    let root = b.finish_from(
        declaration,
        SyntaxKind::SourceFile,
        NodeData::List(vec![declaration, increment, assignment, access]),
    );
    Fixture {
        arena: b.into_arena(),
        root,
        increment,
        assignment,
    }
}

#[test]
fn test_declarations_and_increments_are_writes() {
    let f = fixture();
    let index = VariableUsageIndex::build(&f.arena, f.root);
    let usage = index.usage("i").expect("i is used");
    assert_eq!(usage.writes.len(), 2);
    assert_eq!(usage.reads.len(), 1);
}

#[test]
fn test_assignment_target_is_a_write() {
    let f = fixture();
    let index = VariableUsageIndex::build(&f.arena, f.root);
    let usage = index.usage("x").expect("x is used");
    assert_eq!(usage.writes.len(), 1);
    assert!(usage.reads.is_empty());
}

#[test]
fn test_property_names_are_not_variables() {
    let f = fixture();
    let index = VariableUsageIndex::build(&f.arena, f.root);
    assert_eq!(index.usage("obj").map(|usage| usage.reads.len()), Some(1));
    let reads = &index.usage("i").expect("i is used").reads;
    assert!(reads.iter().all(|read| f.arena.parent(*read) == Some(f.assignment)));
}

#[test]
fn test_writes_and_reads_within_ranges() {
    let f = fixture();
    let index = VariableUsageIndex::build(&f.arena, f.root);
    let increment = f.arena.span(f.increment);
    let assignment = f.arena.span(f.assignment);

    assert!(index.writes_within("i", increment));
    assert!(!index.reads_within("i", increment));
    assert!(index.reads_within("i", assignment));
    assert!(!index.writes_within("i", assignment));
    assert!(!index.writes_within("missing", f.arena.span(f.root)));
}
