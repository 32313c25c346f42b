//! IR command lines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One argument of a command: plain text or a nested command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Argument {
    Text(String),
    Command(IrCommand),
}

impl Argument {
    pub fn text(text: impl Into<String>) -> Argument {
        Argument::Text(text.into())
    }

    /// The text of a plain argument.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Argument::Text(text) => Some(text),
            Argument::Command(_) => None,
        }
    }

    pub fn as_command(&self) -> Option<&IrCommand> {
        match self {
            Argument::Command(command) => Some(command),
            Argument::Text(_) => None,
        }
    }
}

impl From<&str> for Argument {
    fn from(text: &str) -> Self {
        Argument::Text(text.to_string())
    }
}

impl From<String> for Argument {
    fn from(text: String) -> Self {
        Argument::Text(text)
    }
}

impl From<IrCommand> for Argument {
    fn from(command: IrCommand) -> Self {
        Argument::Command(command)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Text(text) if text.chars().any(char::is_whitespace) => {
                write!(f, "({text})")
            }
            Argument::Text(text) => f.write_str(text),
            Argument::Command(command) => write!(f, "{{ {command} }}"),
        }
    }
}

/// A command name from the vocabulary plus its ordered arguments.
///
/// Argument counts are the vocabulary's concern and are not checked here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IrCommand {
    pub name: String,
    #[serde(default)]
    pub args: Vec<Argument>,
}

impl IrCommand {
    pub fn new(name: impl Into<String>) -> IrCommand {
        IrCommand {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn with_args<I, A>(name: impl Into<String>, args: I) -> IrCommand
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        IrCommand {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<Argument>) -> IrCommand {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order.
    #[must_use]
    pub fn extend_args<I, A>(mut self, args: I) -> IrCommand
    where
        I: IntoIterator<Item = A>,
        A: Into<Argument>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for IrCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if self.args.is_empty() {
            return Ok(());
        }
        f.write_str(" :")?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Shorthand for building a command line: `ir!(CLASS_START, "Point")`.
#[macro_export]
macro_rules! ir {
    ($name:expr) => {
        $crate::IrCommand::new($name)
    };
    ($name:expr, $($arg:expr),+ $(,)?) => {
        $crate::IrCommand::new($name)$(.arg($arg))+
    };
}

#[cfg(test)]
#[path = "../tests/command.rs"]
mod tests;
