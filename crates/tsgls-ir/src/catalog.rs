//! IR command vocabulary.
//!
//! The transformation core only needs one piece of per-command metadata: the
//! indentation deltas the indenter applies around a line. Negative deltas
//! apply before the line is rendered, positive ones after.

use crate::command_names::*;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only lookup of command metadata.
pub trait CommandVocabulary: Send + Sync {
    /// Indentation deltas of a command, or `None` if the name is unknown.
    fn indentation(&self, name: &str) -> Option<&[i32]>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    #[serde(default)]
    pub indentation: Vec<i32>,
}

/// A table of commands keyed by name, in declaration order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommandCatalog {
    pub commands: IndexMap<String, CommandMetadata>,
}

const BUILTIN_COMMANDS: &[(&str, &[i32])] = &[
    (CLASS_START, &[1]),
    (CLASS_END, &[-1]),
    (INTERFACE_START, &[1]),
    (INTERFACE_END, &[-1]),
    (INTERFACE_METHOD, &[]),
    (MEMBER_VARIABLE, &[]),
    (MEMBER_FUNCTION_DECLARE_START, &[1]),
    (MEMBER_FUNCTION_DECLARE_END, &[-1]),
    (MEMBER_FUNCTION_CALL, &[]),
    (CONSTRUCTOR_START, &[1]),
    (CONSTRUCTOR_END, &[-1]),
    (FUNCTION_CALL, &[]),
    (STRING_INDEX_OF, &[]),
    (STRING_SUBSTRING_LENGTH, &[]),
    (STRING_SUBSTRING_INDEX, &[]),
    (STRING_CASE_LOWER, &[]),
    (STRING_CASE_UPPER, &[]),
    (STRING_TRIM, &[]),
    (LIST_TYPE, &[]),
    (DICTIONARY_TYPE, &[]),
    (GENERIC_TYPE, &[]),
    (UNION_TYPE, &[]),
    (OPERATION, &[]),
    (VARIABLE, &[]),
    (RETURN, &[]),
    (IF_START, &[1]),
    (ELSE_IF_START, &[-1, 1]),
    (ELSE_START, &[-1, 1]),
    (IF_END, &[-1]),
    (FOR_NUMBERS_START, &[1]),
    (FOR_NUMBERS_END, &[-1]),
    (COMMENT_LINE, &[]),
    (COMMENT_BLOCK_START, &[]),
    (COMMENT_BLOCK, &[]),
    (COMMENT_BLOCK_END, &[]),
];

static BUILTIN: Lazy<CommandCatalog> = Lazy::new(|| {
    let mut catalog = CommandCatalog::default();
    for (name, indentation) in BUILTIN_COMMANDS {
        catalog.insert(name, indentation.to_vec());
    }
    catalog
});

impl CommandCatalog {
    /// The commands emitted by the transformation core.
    pub fn builtin() -> &'static CommandCatalog {
        &BUILTIN
    }

    /// Load a catalog of the form
    /// `{ "commands": { "<name>": { "indentation": [..] } } }`.
    pub fn from_json(text: &str) -> Result<CommandCatalog, CatalogError> {
        let catalog: CommandCatalog = serde_json::from_str(text).map_err(CatalogError::Parse)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn insert(&mut self, name: &str, indentation: Vec<i32>) {
        self.commands
            .insert(name.to_string(), CommandMetadata { indentation });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (name, metadata) in &self.commands {
            if name.trim().is_empty() {
                return Err(CatalogError::Invalid {
                    command: name.clone(),
                    reason: "command names must not be blank",
                });
            }
            if metadata.indentation.contains(&0) {
                return Err(CatalogError::Invalid {
                    command: name.clone(),
                    reason: "indentation deltas must be non-zero",
                });
            }
        }
        Ok(())
    }
}

impl CommandVocabulary for CommandCatalog {
    fn indentation(&self, name: &str) -> Option<&[i32]> {
        self.commands
            .get(name)
            .map(|metadata| metadata.indentation.as_slice())
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    Invalid {
        command: String,
        reason: &'static str,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(err) => write!(f, "invalid command catalog: {err}"),
            CatalogError::Invalid { command, reason } => {
                write!(f, "invalid command '{command}': {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(err) => Some(err),
            CatalogError::Invalid { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "../tests/catalog.rs"]
mod tests;
