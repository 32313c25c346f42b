//! Serialized input documents.

use crate::{NodeArena, NodeIndex, TypeTable};
use serde::{Deserialize, Serialize};

/// One parsed, type-checked source file: the arena, its root and the
/// checker's answers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    pub file_name: String,
    pub arena: NodeArena,
    pub root: NodeIndex,
    #[serde(default)]
    pub types: TypeTable,
}

impl SourceDocument {
    pub fn new(
        file_name: impl Into<String>,
        arena: NodeArena,
        root: NodeIndex,
        types: TypeTable,
    ) -> SourceDocument {
        SourceDocument {
            file_name: file_name.into(),
            arena,
            root,
            types,
        }
    }

    /// Decode a document and restore parent links the producer may have
    /// omitted.
    pub fn from_json(text: &str) -> serde_json::Result<SourceDocument> {
        let mut document: SourceDocument = serde_json::from_str(text)?;
        document.arena.link_parents();
        Ok(document)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[path = "../tests/document.rs"]
mod tests;
