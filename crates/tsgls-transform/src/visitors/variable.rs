//! Variable declarations.

use super::{line, missing};
use crate::router::{NodeVisitRouter, ValueOutcome, VisitResult};
use tsgls_ir::IrCommand;
use tsgls_ir::command_names::VARIABLE;
use tsgls_syntax::NodeIndex;

/// `variable : name type [value]`
pub fn visit_variable_declaration(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let declaration = arena
        .get_value_decl(node)
        .ok_or_else(|| missing(router, node, "declaration data"))?;
    let name = arena.node_text(declaration.name);

    let Some(ty) = router.ctx().aliaser.friendly_type_name(node) else {
        return Ok(Some(router.complaint(
            node,
            format!("variable '{name}' has no representable type"),
        )));
    };

    let mut command = IrCommand::new(VARIABLE).arg(name).arg(ty);
    if let Some(initializer) = declaration.initializer {
        match router.recurse_into_value(initializer)? {
            ValueOutcome::Value(value) => command = command.arg(value),
            ValueOutcome::Complaints(complaints) => {
                return Ok(Some(router.surface(node, complaints)));
            }
        }
    }
    Ok(Some(line(router, node, command)))
}
