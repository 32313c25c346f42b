//! Invariant violations that abort a transform.
//!
//! Unsupported constructs are not errors; they become `Complaint` fragments.

use std::fmt;
use tsgls_common::Span;
use tsgls_ir::IndentError;
use tsgls_syntax::{NodeIndex, SyntaxKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A node index that is not in the arena.
    MissingNode(NodeIndex),
    /// A node whose payload lacks something its kind guarantees.
    MissingChild {
        kind: SyntaxKind,
        span: Span,
        what: &'static str,
    },
    /// Router recursion went past `limits::MAX_VISIT_DEPTH`.
    DepthExceeded { span: Span, depth: usize },
    /// A node reached the router a second time.
    Revisited { kind: SyntaxKind, span: Span },
    Indent(IndentError),
}

impl TransformError {
    /// Source range of the offending node, when there is one.
    pub fn span(&self) -> Option<Span> {
        match self {
            TransformError::MissingChild { span, .. }
            | TransformError::DepthExceeded { span, .. }
            | TransformError::Revisited { span, .. } => Some(*span),
            TransformError::MissingNode(_) | TransformError::Indent(_) => None,
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::MissingNode(idx) => write!(f, "node {} is not in the arena", idx.0),
            TransformError::MissingChild { kind, span, what } => {
                write!(f, "{kind:?} at {span} has no {what}")
            }
            TransformError::DepthExceeded { span, depth } => {
                write!(f, "nesting depth {depth} exceeded at {span}")
            }
            TransformError::Revisited { kind, span } => {
                write!(f, "{kind:?} at {span} was visited twice")
            }
            TransformError::Indent(err) => write!(f, "indentation failed: {err}"),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Indent(err) => Some(err),
            _ => None,
        }
    }
}

impl From<IndentError> for TransformError {
    fn from(err: IndentError) -> Self {
        TransformError::Indent(err)
    }
}
