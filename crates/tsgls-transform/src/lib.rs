//! TypeScript syntax trees to GLS.
//!
//! The pipeline for one document:
//! - `NodeVisitRouter` dispatches every node to its handler in `visitors`
//! - handlers consult `RootAliaser` for friendly type names
//! - the resulting fragments are flattened by `tsgls_ir::TransformationsPrinter`
//! - `tsgls_ir::LineIndenter` renders the indented text
//!
//! `transform_document` runs all of it.

pub mod aliasing;
pub use aliasing::{Privacy, RootAliaser, TypeName};

pub mod casing;
pub use casing::{CaseStyle, NameSplitter};

pub mod context;
pub use context::{TransformOptions, VisitorContext};

pub mod error;
pub use error::TransformError;

pub mod router;
pub use router::{NodeVisitRouter, Route, ValueOutcome, VisitResult, route_for_kind};

pub mod service;
pub use service::{
    CommentTransformer, SourceFileTransformer, TransformOutput, TransformationService,
    Transformer, transform_document, transform_source_document,
};

pub mod usage;
pub use usage::VariableUsageIndex;

pub mod visitors;
