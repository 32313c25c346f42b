//! Class property declarations.

use super::{line, missing};
use crate::router::{NodeVisitRouter, ValueOutcome, VisitResult};
use tsgls_ir::IrCommand;
use tsgls_ir::command_names::MEMBER_VARIABLE;
use tsgls_syntax::NodeIndex;

/// `member variable : privacy name [value]`
pub fn visit_property_declaration(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let property = arena
        .get_value_decl(node)
        .ok_or_else(|| missing(router, node, "property data"))?;

    let privacy = router.ctx().aliaser.friendly_privacy_name(node);
    let mut command = IrCommand::new(MEMBER_VARIABLE)
        .arg(privacy.as_str())
        .arg(arena.node_text(property.name));

    if let Some(initializer) = property.initializer {
        match router.recurse_into_value(initializer)? {
            ValueOutcome::Value(value) => command = command.arg(value),
            ValueOutcome::Complaints(complaints) => {
                return Ok(Some(router.surface(node, complaints)));
            }
        }
    }

    Ok(Some(line(router, node, command)))
}
