//! Interfaces and their members.

use super::{block, line, missing, parameter_list};
use crate::router::{NodeVisitRouter, ValueOutcome, VisitResult};
use tsgls_ir::command_names::{INTERFACE_END, INTERFACE_METHOD, INTERFACE_START};
use tsgls_ir::{Argument, IrCommand};
use tsgls_syntax::NodeIndex;

/// `interface start : Name Base...`, members, `interface end`.
///
/// Base names are the heritage expressions exactly as written.
pub fn visit_interface(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let interface = arena
        .get_interface(node)
        .ok_or_else(|| missing(router, node, "interface data"))?;

    let mut start = IrCommand::new(INTERFACE_START).arg(arena.node_text(interface.name));
    for clause in &interface.heritage_clauses {
        let Some(heritage) = arena.get_heritage(*clause) else {
            continue;
        };
        for ty in &heritage.types {
            let expression = arena
                .get_expr_with_type_args(*ty)
                .map_or(*ty, |data| data.expression);
            start = start.arg(arena.node_text(expression));
        }
    }

    let members = router.recurse_into_nodes(&interface.members)?;
    Ok(Some(block(
        router,
        node,
        start,
        members,
        IrCommand::new(INTERFACE_END),
    )))
}

/// `interface method : name returnType [param type]...`
pub fn visit_method_signature(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let method = arena
        .get_function(node)
        .ok_or_else(|| missing(router, node, "signature data"))?;
    let name = method.name.map_or("", |name| arena.node_text(name));

    let Some(return_type) = router.ctx().aliaser.friendly_return_type_name(node) else {
        return Ok(Some(router.complaint(
            node,
            format!("method '{name}' has no representable return type"),
        )));
    };
    let parameters = match parameter_list(router, &method.parameters) {
        ValueOutcome::Value(parameters) => parameters,
        ValueOutcome::Complaints(complaints) => return Ok(Some(router.surface(node, complaints))),
    };

    let command = IrCommand::new(INTERFACE_METHOD)
        .arg(Argument::text(name))
        .arg(return_type)
        .extend_args(parameters);
    Ok(Some(line(router, node, command)))
}

/// Interfaces carry methods only.
pub fn visit_property_signature(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    Ok(Some(router.unsupported(node)))
}
