//! Binary and unary operations.

use super::{line, missing};
use crate::router::{NodeVisitRouter, ValueOutcome, VisitResult};
use tsgls_ir::command_names::OPERATION;
use tsgls_ir::{Fragment, IrCommand, Transformation};
use tsgls_syntax::{NodeIndex, SyntaxKind};

/// GLS operator alias for an operator token.
pub fn operator_alias(operator: SyntaxKind) -> Option<&'static str> {
    let alias = match operator {
        SyntaxKind::EqualsEqualsEqualsToken | SyntaxKind::EqualsEqualsToken => "equal to",
        SyntaxKind::ExclamationEqualsEqualsToken | SyntaxKind::ExclamationEqualsToken => {
            "not equal to"
        }
        SyntaxKind::LessThanToken => "less than",
        SyntaxKind::LessThanEqualsToken => "less than or equal to",
        SyntaxKind::GreaterThanToken => "greater than",
        SyntaxKind::GreaterThanEqualsToken => "greater than or equal to",
        SyntaxKind::PlusToken => "plus",
        SyntaxKind::MinusToken => "minus",
        SyntaxKind::AsteriskToken => "times",
        SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => "divide by",
        SyntaxKind::PercentToken => "mod",
        SyntaxKind::AmpersandAmpersandToken => "and",
        SyntaxKind::BarBarToken => "or",
        SyntaxKind::EqualsToken => "equals",
        SyntaxKind::PlusEqualsToken => "increase by",
        SyntaxKind::MinusEqualsToken => "decrease by",
        SyntaxKind::AsteriskEqualsToken => "multiply by",
        _ => return None,
    };
    Some(alias)
}

/// `operation : left op right`
pub fn visit_binary_expression(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let binary = arena
        .get_binary(node)
        .ok_or_else(|| missing(router, node, "binary data"))?;

    let Some(alias) = operator_alias(binary.operator) else {
        let operator = binary.operator.token_text().unwrap_or("?");
        return Ok(Some(router.complaint(
            node,
            format!("operator '{operator}' is not supported"),
        )));
    };

    match router.recurse_into_values(&[binary.left, binary.right])? {
        ValueOutcome::Value(values) => {
            let mut values = values.into_iter();
            let mut command = IrCommand::new(OPERATION);
            if let Some(left) = values.next() {
                command = command.arg(left);
            }
            command = command.arg(alias).extend_args(values);
            Ok(Some(line(router, node, command)))
        }
        ValueOutcome::Complaints(complaints) => Ok(Some(router.surface(node, complaints))),
    }
}

/// `i++`/`++i` as `operation : i increase by 1` (and `--` likewise); other
/// unary expressions stay verbatim.
pub fn visit_unary_expression(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let unary = arena
        .get_unary(node)
        .ok_or_else(|| missing(router, node, "unary data"))?;

    let alias = match unary.operator {
        SyntaxKind::PlusPlusToken => "increase by",
        SyntaxKind::MinusMinusToken => "decrease by",
        _ => {
            return Ok(Some(Fragment::Transformation(Transformation::literal(
                router.span(node),
                arena.node_text(node),
            ))));
        }
    };
    let command = IrCommand::new(OPERATION)
        .arg(arena.node_text(unary.operand))
        .arg(alias)
        .arg("1");
    Ok(Some(line(router, node, command)))
}
