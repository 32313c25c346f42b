//! Indentation engine.

use crate::{CommandVocabulary, Line};
use std::fmt;
use tracing::trace;

/// Default indentation unit: four spaces.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndentError {
    /// A command line names a command the vocabulary does not know.
    UnknownCommand { line: usize, name: String },
    /// Depth would drop below zero at this line.
    Unbalanced { line: usize, name: String },
}

impl fmt::Display for IndentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndentError::UnknownCommand { line, name } => {
                write!(f, "line {line}: unknown command '{name}'")
            }
            IndentError::Unbalanced { line, name } => {
                write!(f, "line {line}: '{name}' closes a block that was never opened")
            }
        }
    }
}

impl std::error::Error for IndentError {}

/// Turns printed lines into indented text using per-command deltas.
pub struct LineIndenter<'a> {
    vocabulary: &'a dyn CommandVocabulary,
    unit: String,
}

impl<'a> LineIndenter<'a> {
    pub fn new(vocabulary: &'a dyn CommandVocabulary) -> LineIndenter<'a> {
        LineIndenter {
            vocabulary,
            unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> LineIndenter<'a> {
        self.unit = unit.into();
        self
    }

    /// One output string per input line.
    ///
    /// Literal lines render empty and leave depth untouched. Command lines
    /// apply their negative deltas, render at the current depth, then apply
    /// their positive deltas.
    pub fn indent(&self, lines: &[Line]) -> Result<Vec<String>, IndentError> {
        let mut depth: i64 = 0;
        let mut output = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let Line::Command(command) = line else {
                output.push(String::new());
                continue;
            };
            let deltas = self.vocabulary.indentation(&command.name).ok_or_else(|| {
                IndentError::UnknownCommand {
                    line: index,
                    name: command.name.clone(),
                }
            })?;

            for delta in deltas.iter().filter(|delta| **delta < 0) {
                depth += i64::from(*delta);
            }
            if depth < 0 {
                return Err(IndentError::Unbalanced {
                    line: index,
                    name: command.name.clone(),
                });
            }

            output.push(format!("{}{}", self.unit.repeat(depth as usize), command));

            for delta in deltas.iter().filter(|delta| **delta > 0) {
                depth += i64::from(*delta);
            }
            trace!(line = index, depth, command = %command.name, "indented");
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "../tests/indenter.rs"]
mod tests;
