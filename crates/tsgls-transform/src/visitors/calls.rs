//! Call expressions.

use super::string_member_function::check_string_member_function;
use super::{line, missing};
use crate::router::{NodeVisitRouter, ValueOutcome, VisitResult};
use tsgls_ir::IrCommand;
use tsgls_ir::command_names::{FUNCTION_CALL, MEMBER_FUNCTION_CALL};
use tsgls_syntax::{NodeIndex, SyntaxKind};

/// String methods first, then generic calls.
pub fn visit_call_expression(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    if let Some(fragment) = check_string_member_function(router, node)? {
        return Ok(Some(fragment));
    }
    visit_generic_call(router, node)
}

/// `member function call : receiver method args...` for member callees,
/// `function call : name args...` otherwise.
pub fn visit_generic_call(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let call = arena
        .get_call(node)
        .ok_or_else(|| missing(router, node, "call data"))?;

    let member = match arena.kind(call.expression) {
        Some(SyntaxKind::PropertyAccessExpression) => arena.get_access(call.expression),
        _ => None,
    };
    let command = match member {
        Some(access) => IrCommand::new(MEMBER_FUNCTION_CALL)
            .arg(arena.node_text(access.expression))
            .arg(arena.node_text(access.name_or_argument)),
        None => IrCommand::new(FUNCTION_CALL).arg(arena.node_text(call.expression)),
    };

    match router.recurse_into_values(&call.arguments)? {
        ValueOutcome::Value(args) => Ok(Some(line(router, node, command.extend_args(args)))),
        ValueOutcome::Complaints(complaints) => Ok(Some(router.surface(node, complaints))),
    }
}
