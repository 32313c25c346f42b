//! Native string methods with dedicated GLS commands.

use super::line;
use crate::router::{NodeVisitRouter, ValueOutcome, VisitResult};
use tsgls_ir::command_names::{
    STRING_CASE_LOWER, STRING_CASE_UPPER, STRING_INDEX_OF, STRING_SUBSTRING_INDEX,
    STRING_SUBSTRING_LENGTH, STRING_TRIM,
};
use tsgls_ir::{Argument, IrCommand};
use tsgls_syntax::{NodeIndex, SyntaxKind};

const KNOWN_METHODS: [(&str, &str); 6] = [
    ("indexOf", STRING_INDEX_OF),
    ("substr", STRING_SUBSTRING_LENGTH),
    ("substring", STRING_SUBSTRING_INDEX),
    ("toLowerCase", STRING_CASE_LOWER),
    ("toUpperCase", STRING_CASE_UPPER),
    ("trim", STRING_TRIM),
];

/// GLS command for a string method name.
pub fn string_method_command(method: &str) -> Option<&'static str> {
    KNOWN_METHODS
        .iter()
        .find(|(name, _)| *name == method)
        .map(|(_, command)| *command)
}

/// Rewrites `receiver.method(args)` when the receiver is a string and the
/// method has a GLS command. `Ok(None)` leaves the call to generic handling.
pub fn check_string_member_function(
    router: &mut NodeVisitRouter<'_>,
    call_node: NodeIndex,
) -> VisitResult {
    let arena = router.arena();
    let Some(call) = arena.get_call(call_node) else {
        return Ok(None);
    };
    if arena.kind(call.expression) != Some(SyntaxKind::PropertyAccessExpression) {
        return Ok(None);
    }
    let Some(access) = arena.get_access(call.expression) else {
        return Ok(None);
    };
    let Some(command_name) = string_method_command(arena.node_text(access.name_or_argument))
    else {
        return Ok(None);
    };
    if router.ctx().aliaser.friendly_type_name(access.expression) != Some(Argument::text("string"))
    {
        return Ok(None);
    }

    let args = match router.recurse_into_values(&call.arguments)? {
        ValueOutcome::Value(args) => args,
        ValueOutcome::Complaints(complaints) => {
            return Ok(Some(router.surface(call_node, complaints)));
        }
    };
    let command = IrCommand::new(command_name)
        .arg(arena.node_text(access.expression))
        .extend_args(args);
    Ok(Some(line(router, call_node, command)))
}
