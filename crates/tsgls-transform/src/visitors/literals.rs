//! Values written verbatim: numbers, keywords, names and property accesses.

use crate::router::{NodeVisitRouter, VisitResult};
use tsgls_ir::{Fragment, Transformation};
use tsgls_syntax::NodeIndex;

pub fn visit_literal_value(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let text = router.arena().node_text(node);
    Ok(Some(Fragment::Transformation(Transformation::literal(
        router.span(node),
        text,
    ))))
}
