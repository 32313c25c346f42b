//! Methods, constructors and return statements.

use super::{block, line, missing, parameter_list};
use crate::router::{NodeVisitRouter, ValueOutcome, VisitResult};
use tsgls_ir::command_names::{
    CONSTRUCTOR_END, CONSTRUCTOR_START, MEMBER_FUNCTION_DECLARE_END, MEMBER_FUNCTION_DECLARE_START,
    RETURN,
};
use tsgls_ir::{Fragment, IrCommand};
use tsgls_syntax::NodeIndex;

fn body_fragments(
    router: &mut NodeVisitRouter<'_>,
    body: Option<NodeIndex>,
) -> Result<Vec<Fragment>, crate::TransformError> {
    match body {
        Some(body) => router.recurse_into_node(body),
        None => Ok(Vec::new()),
    }
}

/// `member function declare start : privacy name returnType [param type]...`,
/// body, `member function declare end`.
pub fn visit_method_declaration(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let method = arena
        .get_function(node)
        .ok_or_else(|| missing(router, node, "method data"))?;
    let name = method
        .name
        .map(|name| arena.node_text(name))
        .ok_or_else(|| missing(router, node, "name"))?;

    let privacy = router.ctx().aliaser.friendly_privacy_name(node);
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

    let start = IrCommand::new(MEMBER_FUNCTION_DECLARE_START)
        .arg(privacy.as_str())
        .arg(name)
        .arg(return_type)
        .extend_args(parameters);
    let body = body_fragments(router, method.body)?;
    Ok(Some(block(
        router,
        node,
        start,
        body,
        IrCommand::new(MEMBER_FUNCTION_DECLARE_END),
    )))
}

/// `constructor start : privacy ClassName [param type]...`, body,
/// `constructor end`.
pub fn visit_constructor(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let arena = router.arena();
    let constructor = arena
        .get_function(node)
        .ok_or_else(|| missing(router, node, "constructor data"))?;
    let class_name = arena
        .parent(node)
        .and_then(|class| arena.get_class(class))
        .and_then(|class| class.name)
        .map(|name| arena.node_text(name));
    let Some(class_name) = class_name else {
        return Ok(Some(router.complaint(
            node,
            "constructor of an anonymous class is not supported",
        )));
    };

    let privacy = router.ctx().aliaser.friendly_privacy_name(node);
    let parameters = match parameter_list(router, &constructor.parameters) {
        ValueOutcome::Value(parameters) => parameters,
        ValueOutcome::Complaints(complaints) => return Ok(Some(router.surface(node, complaints))),
    };

    let start = IrCommand::new(CONSTRUCTOR_START)
        .arg(privacy.as_str())
        .arg(class_name)
        .extend_args(parameters);
    let body = body_fragments(router, constructor.body)?;
    Ok(Some(block(
        router,
        node,
        start,
        body,
        IrCommand::new(CONSTRUCTOR_END),
    )))
}

/// `return : value`, or a bare `return`.
pub fn visit_return_statement(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let Some(value) = router.arena().get_wrapped(node) else {
        return Ok(Some(line(router, node, IrCommand::new(RETURN))));
    };
    match router.recurse_into_value(value)? {
        ValueOutcome::Value(value) => Ok(Some(line(router, node, IrCommand::new(RETURN).arg(value)))),
        ValueOutcome::Complaints(complaints) => Ok(Some(router.surface(node, complaints))),
    }
}
