use super::*;
use crate::context::TransformOptions;
use tsgls_ir::IrCommand;
use tsgls_syntax::{BinaryData, NodeData, TreeBuilder, TypeTable};

fn with_router<R>(arena: &NodeArena, root: NodeIndex, f: impl FnOnce(&mut NodeVisitRouter<'_>) -> R) -> R {
    let types = TypeTable::new();
    let options = TransformOptions::default();
    let ctx = VisitorContext::new(arena, &types, root, &options);
    let mut router = NodeVisitRouter::new(ctx);
    f(&mut router)
}

#[test]
fn test_route_categories() {
    assert!(matches!(route_for_kind(SyntaxKind::ClassDeclaration), Route::Visit(_)));
    assert!(matches!(route_for_kind(SyntaxKind::Block), Route::PassThrough));
    assert!(matches!(route_for_kind(SyntaxKind::SourceFile), Route::PassThrough));
    assert!(matches!(route_for_kind(SyntaxKind::SemicolonToken), Route::Skip));
    assert!(matches!(route_for_kind(SyntaxKind::TypeReference), Route::Skip));
    assert!(matches!(route_for_kind(SyntaxKind::SuperKeyword), Route::Unmapped));
    assert_eq!(format!("{:?}", route_for_kind(SyntaxKind::Parameter)), "Skip");
}

#[test]
fn test_missing_node_is_an_error() {
    let arena = NodeArena::new("");
    with_router(&arena, NodeIndex(0), |router| {
        let err = router.recurse_into_node(NodeIndex(3)).unwrap_err();
        assert!(matches!(err, TransformError::MissingNode(NodeIndex(3))));
    });
}

#[test]
fn test_nodes_are_dispatched_once() {
    let mut b = TreeBuilder::new();
    let one = b.numeric_literal("1");
    let arena = b.into_arena();
    with_router(&arena, one, |router| {
        assert!(!router.has_visited(one));
        assert_eq!(router.recurse_into_node(one).unwrap().len(), 1);
        assert!(router.has_visited(one));
        let err = router.recurse_into_node(one).unwrap_err();
        assert!(matches!(err, TransformError::Revisited { kind: SyntaxKind::NumericLiteral, .. }));
    });
}

#[test]
fn test_unmapped_leaf_is_a_complaint() {
    let mut b = TreeBuilder::new();
    let sup = b.token(SyntaxKind::SuperKeyword);
    let arena = b.into_arena();
    with_router(&arena, sup, |router| {
        let fragments = router.recurse_into_node(sup).unwrap();
        match fragments.as_slice() {
            [Fragment::Complaint(complaint)] => {
                assert_eq!(complaint.reason, "super keyword is not supported");
                assert_eq!(complaint.range, arena.span(sup));
            }
            other => panic!("expected one complaint, got {other:?}"),
        }
    });
}

#[test]
fn test_skipped_nodes_have_no_output() {
    let mut b = TreeBuilder::new();
    let semicolon = b.token(SyntaxKind::SemicolonToken);
    let arena = b.into_arena();
    with_router(&arena, semicolon, |router| {
        assert!(router.recurse_into_node(semicolon).unwrap().is_empty());
    });
}

#[test]
fn test_depth_limit() {
    // Debug frames are large; give the walk room to reach the limit.
    let walk = std::thread::Builder::new()
        .stack_size(64 << 20)
        .spawn(|| {
            let mut arena = NodeArena::new("x");
            let mut node = arena.add_node(
                SyntaxKind::Identifier,
                Span::new(0, 1),
                NodeData::Identifier(tsgls_syntax::IdentifierData {
                    escaped_text: "x".to_string(),
                }),
            );
            for _ in 0..MAX_VISIT_DEPTH + 10 {
                node = arena.add_node(
                    SyntaxKind::ParenthesizedExpression,
                    Span::new(0, 1),
                    NodeData::Wrapped(Some(node)),
                );
            }
            with_router(&arena, node, |router| router.recurse_into_node(node).unwrap_err())
        })
        .unwrap();
    let err = walk.join().unwrap();
    assert!(matches!(err, TransformError::DepthExceeded { depth, .. } if depth == MAX_VISIT_DEPTH));
}

#[test]
fn test_values_from_single_lines() {
    let mut b = TreeBuilder::new();
    let left = b.identifier("a");
    b.text("+");
    let right = b.numeric_literal("2");
    let sum = b.finish_from(
        left,
        SyntaxKind::BinaryExpression,
        NodeData::Binary(BinaryData {
            left,
            operator: SyntaxKind::PlusToken,
            right,
        }),
    );
    let arena = b.into_arena();
    with_router(&arena, sum, |router| {
        let value = router.recurse_into_value(sum).unwrap();
        let expected = IrCommand::new("operation").arg("a").arg("plus").arg("2");
        assert_eq!(value, ValueOutcome::Value(Argument::Command(expected)));
    });
}

#[test]
fn test_values_gather_every_complaint() {
    let mut b = TreeBuilder::new();
    let first = b.token(SyntaxKind::SuperKeyword);
    let second = b.token(SyntaxKind::SuperKeyword);
    let fine = b.numeric_literal("3");
    let arena = b.into_arena();
    with_router(&arena, first, |router| {
        match router.recurse_into_values(&[first, fine, second]).unwrap() {
            ValueOutcome::Complaints(complaints) => assert_eq!(complaints.len(), 2),
            ValueOutcome::Value(values) => panic!("expected complaints, got {values:?}"),
        }
    });
}

#[test]
fn test_surface_wraps_complaints() {
    let mut b = TreeBuilder::new();
    let one = b.numeric_literal("1");
    let arena = b.into_arena();
    with_router(&arena, one, |router| {
        let complaint = Complaint::new(Span::new(0, 1), "bad");
        let fragment = router.surface(one, vec![complaint.clone()]);
        let program = TransformationsPrinter::new().print(&[fragment]);
        assert!(program.lines.is_empty());
        assert_eq!(program.complaints, vec![complaint]);
    });
}

#[test]
fn test_multi_line_value_is_a_complaint() {
    let mut b = TreeBuilder::new();
    b.text("{");
    let one = b.numeric_literal("1");
    b.text(";");
    let two = b.numeric_literal("2");
    b.text("}");
    let block = b.finish_from(one, SyntaxKind::Block, NodeData::List(vec![one, two]));
    let arena = b.into_arena();
    with_router(&arena, block, |router| match router.recurse_into_value(block).unwrap() {
        ValueOutcome::Complaints(complaints) => {
            assert_eq!(complaints.len(), 1);
            assert_eq!(complaints[0].reason, "block cannot be used as a value");
            assert_eq!(complaints[0].range, arena.span(block));
        }
        ValueOutcome::Value(value) => panic!("expected a complaint, got {value:?}"),
    });
}
