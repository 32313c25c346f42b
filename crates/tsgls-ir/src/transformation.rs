//! Per-node transformation results.

use crate::IrCommand;
use serde::{Deserialize, Serialize};
use tsgls_common::Span;

/// A construct with no defined mapping. Data, never a raised fault.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub range: Span,
    pub reason: String,
}

impl Complaint {
    pub fn new(range: Span, reason: impl Into<String>) -> Complaint {
        Complaint {
            range,
            reason: reason.into(),
        }
    }
}

/// One element of a transformation's output, emitted in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Output {
    Command(IrCommand),
    /// A verbatim line (a value expression at statement level).
    Literal(String),
    Transformation(Transformation),
    Complaint(Complaint),
}

impl From<IrCommand> for Output {
    fn from(command: IrCommand) -> Self {
        Output::Command(command)
    }
}

impl From<Transformation> for Output {
    fn from(transformation: Transformation) -> Self {
        Output::Transformation(transformation)
    }
}

impl From<Complaint> for Output {
    fn from(complaint: Complaint) -> Self {
        Output::Complaint(complaint)
    }
}

impl From<Fragment> for Output {
    fn from(fragment: Fragment) -> Self {
        match fragment {
            Fragment::Transformation(transformation) => Output::Transformation(transformation),
            Fragment::Complaint(complaint) => Output::Complaint(complaint),
        }
    }
}

/// The output produced for one source range.
///
/// The range is for traceability; output order is production order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub range: Span,
    pub output: Vec<Output>,
}

impl Transformation {
    pub fn new(range: Span, output: Vec<Output>) -> Transformation {
        Transformation { range, output }
    }

    /// A transformation holding a single command line.
    pub fn command(range: Span, command: IrCommand) -> Transformation {
        Transformation {
            range,
            output: vec![Output::Command(command)],
        }
    }

    /// A transformation holding a single literal line.
    pub fn literal(range: Span, text: impl Into<String>) -> Transformation {
        Transformation {
            range,
            output: vec![Output::Literal(text.into())],
        }
    }
}

/// One element of a router result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    Transformation(Transformation),
    Complaint(Complaint),
}

impl Fragment {
    pub fn is_complaint(&self) -> bool {
        matches!(self, Fragment::Complaint(_))
    }
}

impl From<Transformation> for Fragment {
    fn from(transformation: Transformation) -> Self {
        Fragment::Transformation(transformation)
    }
}

impl From<Complaint> for Fragment {
    fn from(complaint: Complaint) -> Self {
        Fragment::Complaint(complaint)
    }
}
