//! Linearizes nested transformations into one ordered program.

use crate::{Complaint, Fragment, IrCommand, Output, Transformation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a printed program.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    Command(IrCommand),
    Literal(String),
}

impl Line {
    pub fn as_command(&self) -> Option<&IrCommand> {
        match self {
            Line::Command(command) => Some(command),
            Line::Literal(_) => None,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Command(command) => command.fmt(f),
            Line::Literal(text) => f.write_str(text),
        }
    }
}

/// Flattened output: lines in pre-order, complaints in encounter order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintedProgram {
    pub lines: Vec<Line>,
    pub complaints: Vec<Complaint>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TransformationsPrinter;

impl TransformationsPrinter {
    pub fn new() -> TransformationsPrinter {
        TransformationsPrinter
    }

    /// Splice nested transformations in place; collect complaints aside.
    /// Nothing is reordered or deduplicated.
    pub fn print(&self, fragments: &[Fragment]) -> PrintedProgram {
        let mut program = PrintedProgram::default();
        for fragment in fragments {
            match fragment {
                Fragment::Transformation(transformation) => {
                    Self::print_transformation(transformation, &mut program);
                }
                Fragment::Complaint(complaint) => program.complaints.push(complaint.clone()),
            }
        }
        program
    }

    fn print_transformation(transformation: &Transformation, program: &mut PrintedProgram) {
        for output in &transformation.output {
            match output {
                Output::Command(command) => program.lines.push(Line::Command(command.clone())),
                Output::Literal(text) => program.lines.push(Line::Literal(text.clone())),
                Output::Transformation(nested) => Self::print_transformation(nested, program),
                Output::Complaint(complaint) => program.complaints.push(complaint.clone()),
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/printer.rs"]
mod tests;
