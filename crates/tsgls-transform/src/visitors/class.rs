//! Class declarations and expressions.

use super::{block, missing};
use crate::router::{NodeVisitRouter, VisitResult};
use tracing::debug;
use tsgls_ir::command_names::{CLASS_END, CLASS_START};
use tsgls_ir::{IrCommand, ir};
use tsgls_syntax::NodeIndex;

/// `class start : Name`, members, `class end`.
///
/// Anonymous classes produce no output at all.
pub fn visit_class(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let class = arena
        .get_class(node)
        .ok_or_else(|| missing(router, node, "class data"))?;
    let Some(name) = class.name else {
        debug!(node = node.0, "skipping anonymous class");
        return Ok(None);
    };

    let members = router.recurse_into_nodes(&class.members)?;
    Ok(Some(block(
        router,
        node,
        ir!(CLASS_START, arena.node_text(name)),
        members,
        IrCommand::new(CLASS_END),
    )))
}
