//! Transformers and the document pipeline.

use crate::context::{TransformOptions, VisitorContext};
use crate::error::TransformError;
use crate::router::NodeVisitRouter;
use crate::visitors::comments::visit_each_comment;
use serde::Serialize;
use tracing::debug;
use tsgls_ir::{
    Complaint, CommandVocabulary, Fragment, LineIndenter, TransformationsPrinter,
};
use tsgls_syntax::{NodeArena, NodeIndex, SourceDocument, TypeQuery};

/// Produces fragments for one document.
pub trait Transformer: Send + Sync {
    fn name(&self) -> &'static str;

    fn transform(
        &self,
        router: &mut NodeVisitRouter<'_>,
        root: NodeIndex,
    ) -> Result<Vec<Fragment>, TransformError>;
}

/// Routes the whole tree from its root.
#[derive(Clone, Copy, Debug, Default)]
pub struct SourceFileTransformer;

impl Transformer for SourceFileTransformer {
    fn name(&self) -> &'static str {
        "source file"
    }

    fn transform(
        &self,
        router: &mut NodeVisitRouter<'_>,
        root: NodeIndex,
    ) -> Result<Vec<Fragment>, TransformError> {
        router.recurse_into_node(root)
    }
}

/// Emits the source text's comments.
#[derive(Clone, Copy, Debug, Default)]
pub struct CommentTransformer;

impl Transformer for CommentTransformer {
    fn name(&self) -> &'static str {
        "comments"
    }

    fn transform(
        &self,
        router: &mut NodeVisitRouter<'_>,
        _root: NodeIndex,
    ) -> Result<Vec<Fragment>, TransformError> {
        Ok(visit_each_comment(router.arena()))
    }
}

/// Runs transformers in order and concatenates their fragments.
pub struct TransformationService {
    transformers: Vec<Box<dyn Transformer>>,
}

impl TransformationService {
    pub fn new(transformers: Vec<Box<dyn Transformer>>) -> TransformationService {
        TransformationService { transformers }
    }

    /// The source-file transformer, plus comments unless skipped.
    pub fn from_options(options: &TransformOptions) -> TransformationService {
        let mut transformers: Vec<Box<dyn Transformer>> = vec![Box::new(SourceFileTransformer)];
        if !options.skip_comments {
            transformers.push(Box::new(CommentTransformer));
        }
        TransformationService::new(transformers)
    }

    pub fn transform(
        &self,
        router: &mut NodeVisitRouter<'_>,
        root: NodeIndex,
    ) -> Result<Vec<Fragment>, TransformError> {
        let mut fragments = Vec::new();
        for transformer in &self.transformers {
            let produced = transformer.transform(router, root)?;
            debug!(transformer = transformer.name(), fragments = produced.len(), "transformed");
            fragments.extend(produced);
        }
        Ok(fragments)
    }
}

/// Indented GLS lines and the constructs that could not be mapped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TransformOutput {
    pub lines: Vec<String>,
    pub complaints: Vec<Complaint>,
}

/// Transform one tree into indented GLS text.
#[tracing::instrument(level = "debug", skip_all, fields(root = root.0, nodes = arena.len()))]
pub fn transform_document(
    arena: &NodeArena,
    types: &dyn TypeQuery,
    root: NodeIndex,
    vocabulary: &dyn CommandVocabulary,
    options: &TransformOptions,
) -> Result<TransformOutput, TransformError> {
    let ctx = VisitorContext::new(arena, types, root, options);
    let mut router = NodeVisitRouter::new(ctx);
    let fragments = TransformationService::from_options(options).transform(&mut router, root)?;

    let program = TransformationsPrinter::new().print(&fragments);
    let lines = LineIndenter::new(vocabulary)
        .with_unit(options.indent_unit.as_str())
        .indent(&program.lines)?;

    debug!(
        lines = lines.len(),
        complaints = program.complaints.len(),
        "document transformed"
    );
    Ok(TransformOutput {
        lines,
        complaints: program.complaints,
    })
}

/// `transform_document` over a deserialized document.
pub fn transform_source_document(
    document: &SourceDocument,
    vocabulary: &dyn CommandVocabulary,
    options: &TransformOptions,
) -> Result<TransformOutput, TransformError> {
    transform_document(
        &document.arena,
        &document.types,
        document.root,
        vocabulary,
        options,
    )
}
