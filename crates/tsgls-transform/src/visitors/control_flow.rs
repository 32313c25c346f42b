//! If statements and counting loops.

use super::{block, missing};
use crate::router::{NodeVisitRouter, ValueOutcome, VisitResult};
use tsgls_ir::command_names::{
    ELSE_IF_START, ELSE_START, FOR_NUMBERS_END, FOR_NUMBERS_START, IF_END, IF_START,
};
use tsgls_ir::{
    Argument, Complaint, Fragment, IrCommand, Output, Transformation, TransformationsPrinter,
};
use tsgls_syntax::{NodeData, NodeIndex, SyntaxKind};

/// `if start : cond`, then-branch, `else if start : cond` / `else start`
/// branches, `if end`.
pub fn visit_if_statement(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let mut output = Vec::new();
    let mut complaints: Vec<Complaint> = Vec::new();
    let mut current = node;
    let mut start_name = IF_START;

    loop {
        let statement = arena
            .get_if(current)
            .ok_or_else(|| missing(router, current, "if data"))?;
        match router.recurse_into_value(statement.condition)? {
            ValueOutcome::Value(condition) => {
                output.push(Output::Command(IrCommand::new(start_name).arg(condition)));
            }
            ValueOutcome::Complaints(found) => complaints.extend(found),
        }
        let then_branch = router.recurse_into_node(statement.then_statement)?;
        output.extend(then_branch.into_iter().map(Output::from));

        match statement.else_statement {
            Some(next) if arena.kind(next) == Some(SyntaxKind::IfStatement) => {
                current = next;
                start_name = ELSE_IF_START;
            }
            Some(otherwise) => {
                output.push(Output::Command(IrCommand::new(ELSE_START)));
                let else_branch = router.recurse_into_node(otherwise)?;
                output.extend(else_branch.into_iter().map(Output::from));
                break;
            }
            None => break,
        }
    }

    if !complaints.is_empty() {
        let branches = Transformation::new(router.span(node), output);
        let program = TransformationsPrinter::new().print(&[branches.into()]);
        complaints.extend(program.complaints);
        return Ok(Some(router.surface(node, complaints)));
    }
    output.push(Output::Command(IrCommand::new(IF_END)));
    Ok(Some(Fragment::Transformation(Transformation::new(
        router.span(node),
        output,
    ))))
}

/// The parts of `for (let i = start; i < end; i++)`.
struct CountingLoop {
    variable: NodeIndex,
    start: NodeIndex,
    end: NodeIndex,
}

fn counting_loop(router: &NodeVisitRouter<'_>, node: NodeIndex) -> Option<CountingLoop> {
    let arena = router.arena();
    let data = arena.get_loop(node)?;

    let declarations = arena.get_list(data.initializer?)?;
    let [declaration] = declarations.as_slice() else {
        return None;
    };
    let declaration = arena.get_value_decl(*declaration)?;
    let name = arena.identifier_text(declaration.name)?;
    let start = declaration.initializer?;

    let condition = arena.get_binary(data.condition?)?;
    if condition.operator != SyntaxKind::LessThanToken
        || arena.identifier_text(condition.left) != Some(name)
    {
        return None;
    }

    if !is_unit_increment(router, data.incrementor?, name) {
        return None;
    }

    Some(CountingLoop {
        variable: declaration.name,
        start,
        end: condition.right,
    })
}

/// `i++`, `++i` or `i += 1`.
fn is_unit_increment(router: &NodeVisitRouter<'_>, node: NodeIndex, name: &str) -> bool {
    let arena = router.arena();
    match arena.get(node).map(|n| &n.data) {
        Some(NodeData::Unary(unary)) => {
            unary.operator == SyntaxKind::PlusPlusToken
                && arena.identifier_text(unary.operand) == Some(name)
        }
        Some(NodeData::Binary(binary)) => {
            binary.operator == SyntaxKind::PlusEqualsToken
                && arena.identifier_text(binary.left) == Some(name)
                && arena.node_text(binary.right) == "1"
        }
        _ => false,
    }
}

/// `for numbers start : i int start end`, body, `for numbers end`.
///
/// Only counting loops whose variable is left alone by the body qualify.
pub fn visit_for_statement(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let data = arena
        .get_loop(node)
        .ok_or_else(|| missing(router, node, "loop data"))?;
    let Some(shape) = counting_loop(router, node) else {
        return Ok(Some(router.complaint(
            node,
            "only counting for loops are supported",
        )));
    };

    let name = arena.node_text(shape.variable);
    if router
        .ctx()
        .usage
        .writes_within(name, arena.span(data.statement))
    {
        return Ok(Some(router.complaint(
            node,
            format!("loop variable '{name}' is modified inside the loop"),
        )));
    }

    let bounds = match router.recurse_into_values(&[shape.start, shape.end])? {
        ValueOutcome::Value(bounds) => bounds,
        ValueOutcome::Complaints(complaints) => return Ok(Some(router.surface(node, complaints))),
    };
    let start = IrCommand::new(FOR_NUMBERS_START)
        .arg(name)
        .arg(Argument::text("int"))
        .extend_args(bounds);
    let body = router.recurse_into_node(data.statement)?;

    Ok(Some(block(
        router,
        node,
        start,
        body,
        IrCommand::new(FOR_NUMBERS_END),
    )))
}
