//! tsgls: TypeScript syntax trees to General Language Syntax.
//!
//! This crate re-exports the workspace crates under short names and adds a
//! one-call entry point for serialized documents:
//!
//! - `common`: spans, positions, comment ranges, limits
//! - `syntax`: the node arena, syntax kinds, type queries, documents
//! - `ir`: IR commands, transformations, the printer and the indenter
//! - `transform`: the router, handlers and the friendly-type resolver

pub use tsgls_common as common;
pub use tsgls_ir as ir;
pub use tsgls_syntax as syntax;
pub use tsgls_transform as transform;

pub use tsgls_ir::{CommandCatalog, CommandVocabulary, Complaint};
pub use tsgls_syntax::SourceDocument;
pub use tsgls_transform::{
    TransformError, TransformOptions, TransformOutput, transform_document,
    transform_source_document,
};

use std::fmt;

/// Failure to decode or transform a serialized document.
#[derive(Debug)]
pub enum PipelineError {
    Document(serde_json::Error),
    Transform(TransformError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Document(err) => write!(f, "invalid document: {err}"),
            PipelineError::Transform(err) => write!(f, "transform failed: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Document(err) => Some(err),
            PipelineError::Transform(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Document(err)
    }
}

impl From<TransformError> for PipelineError {
    fn from(err: TransformError) -> Self {
        PipelineError::Transform(err)
    }
}

/// Decode a document from JSON and transform it with the built-in command
/// catalog.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = json.len()))]
pub fn transform_json(
    json: &str,
    options: &TransformOptions,
) -> Result<TransformOutput, PipelineError> {
    let document = SourceDocument::from_json(json)?;
    Ok(transform_source_document(
        &document,
        CommandCatalog::builtin(),
        options,
    )?)
}

#[cfg(test)]
#[path = "tests/facade_tests.rs"]
mod facade_tests;
