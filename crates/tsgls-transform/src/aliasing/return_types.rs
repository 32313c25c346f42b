//! Return statements owned by a function-like node.

use tsgls_syntax::{NodeArena, NodeIndex, SyntaxKind};

/// Kinds that own their own return statements.
fn is_function_boundary(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FunctionDeclaration
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::Constructor
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::ClassExpression
    )
}

/// Return statements of `function` in source order, skipping those of nested
/// functions and classes.
pub fn find_return_statements(arena: &NodeArena, function: NodeIndex) -> Vec<NodeIndex> {
    let mut returns = Vec::new();
    let Some(body) = arena.get_function(function).and_then(|data| data.body) else {
        return returns;
    };

    let mut stack = vec![body];
    while let Some(node) = stack.pop() {
        let Some(kind) = arena.kind(node) else {
            continue;
        };
        if kind == SyntaxKind::ReturnStatement {
            returns.push(node);
            continue;
        }
        if is_function_boundary(kind) {
            continue;
        }
        stack.extend(arena.children(node).into_iter().rev());
    }
    returns
}
