//! Per-kind node handlers.
//!
//! Every handler has the `router::Handler` signature. Handlers read their
//! node through the arena, call back into the router for children, and
//! return one fragment (or nothing).

pub mod binary;
pub mod calls;
pub mod class;
pub mod comments;
pub mod control_flow;
pub mod functions;
pub mod interface;
pub mod literals;
pub mod property;
pub mod string_literal;
pub mod string_member_function;
pub mod variable;

use crate::error::TransformError;
use crate::router::{NodeVisitRouter, ValueOutcome};
use tsgls_ir::{Argument, Complaint, Fragment, IrCommand, Output, Transformation};
use tsgls_syntax::NodeIndex;

/// Invariant violation for a node whose payload does not match its kind.
pub(crate) fn missing(
    router: &NodeVisitRouter<'_>,
    node: NodeIndex,
    what: &'static str,
) -> TransformError {
    let arena = router.arena();
    match arena.get(node) {
        Some(data) => TransformError::MissingChild {
            kind: data.kind,
            span: data.span(),
            what,
        },
        None => TransformError::MissingNode(node),
    }
}

/// `start`, the body's fragments, `end`, as one transformation.
pub(crate) fn block(
    router: &NodeVisitRouter<'_>,
    node: NodeIndex,
    start: IrCommand,
    body: Vec<Fragment>,
    end: IrCommand,
) -> Fragment {
    let mut output = Vec::with_capacity(body.len() + 2);
    output.push(Output::Command(start));
    output.extend(body.into_iter().map(Output::from));
    output.push(Output::Command(end));
    Fragment::Transformation(Transformation::new(router.span(node), output))
}

/// A single-line transformation for `node`.
pub(crate) fn line(router: &NodeVisitRouter<'_>, node: NodeIndex, command: IrCommand) -> Fragment {
    Fragment::Transformation(Transformation::command(router.span(node), command))
}

/// `name type` pairs for parameters, or complaints for those without a
/// representable type.
pub(crate) fn parameter_list(
    router: &NodeVisitRouter<'_>,
    parameters: &[NodeIndex],
) -> ValueOutcome<Vec<Argument>> {
    let arena = router.arena();
    let mut args = Vec::with_capacity(parameters.len() * 2);
    let mut complaints = Vec::new();
    for parameter in parameters {
        let name = arena
            .get_value_decl(*parameter)
            .map_or("", |decl| arena.node_text(decl.name));
        match router.ctx().aliaser.friendly_type_name(*parameter) {
            Some(ty) => {
                args.push(Argument::text(name));
                args.push(ty);
            }
            None => complaints.push(Complaint::new(
                arena.span(*parameter),
                format!("parameter '{name}' has no representable type"),
            )),
        }
    }
    if complaints.is_empty() {
        ValueOutcome::Value(args)
    } else {
        ValueOutcome::Complaints(complaints)
    }
}
