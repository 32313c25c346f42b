//! Node dispatch.
//!
//! The router classifies every node kind with `route_for_kind` and either
//! calls the kind's handler, recurses into the node's children, or skips it.
//! Handlers call back into the router for their children, so one router
//! drives the whole traversal of a document.

use crate::context::VisitorContext;
use crate::error::TransformError;
use crate::visitors::{
    binary, calls, class, control_flow, functions, interface, literals, property, string_literal,
    variable,
};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};
use tsgls_common::Span;
use tsgls_common::limits::MAX_VISIT_DEPTH;
use tsgls_ir::{Argument, Complaint, Fragment, Line, Output, Transformation, TransformationsPrinter};
use tsgls_syntax::{NodeArena, NodeIndex, SyntaxKind};

/// Handler result: one fragment, or nothing when the node has no output.
pub type VisitResult = Result<Option<Fragment>, TransformError>;

pub type Handler = fn(&mut NodeVisitRouter<'_>, NodeIndex) -> VisitResult;

#[derive(Clone, Copy)]
pub enum Route {
    /// Call the kind's handler.
    Visit(Handler),
    /// Recurse into children; the node itself has no output.
    PassThrough,
    /// Punctuation, trivia, keywords and type-level nodes: no output.
    Skip,
    /// No mapping. Children are recursed into; a leaf is a complaint.
    Unmapped,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Visit(_) => f.write_str("Visit"),
            Route::PassThrough => f.write_str("PassThrough"),
            Route::Skip => f.write_str("Skip"),
            Route::Unmapped => f.write_str("Unmapped"),
        }
    }
}

/// Route for every syntax kind. No wildcard arm: a new kind must be routed
/// here before it compiles.
pub fn route_for_kind(kind: SyntaxKind) -> Route {
    match kind {
        SyntaxKind::Unknown => Route::Unmapped,
        SyntaxKind::EndOfFileToken => Route::Skip,

        SyntaxKind::SingleLineCommentTrivia
        | SyntaxKind::MultiLineCommentTrivia
        | SyntaxKind::NewLineTrivia
        | SyntaxKind::WhitespaceTrivia => Route::Skip,

        SyntaxKind::NumericLiteral => Route::Visit(literals::visit_literal_value),
        SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => {
            Route::Visit(string_literal::visit_string_literal)
        }
        SyntaxKind::BigIntLiteral | SyntaxKind::RegularExpressionLiteral => Route::Unmapped,

        SyntaxKind::OpenBraceToken
        | SyntaxKind::CloseBraceToken
        | SyntaxKind::OpenParenToken
        | SyntaxKind::CloseParenToken
        | SyntaxKind::OpenBracketToken
        | SyntaxKind::CloseBracketToken
        | SyntaxKind::DotToken
        | SyntaxKind::SemicolonToken
        | SyntaxKind::CommaToken
        | SyntaxKind::ColonToken
        | SyntaxKind::QuestionToken => Route::Skip,

        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken
        | SyntaxKind::PlusToken
        | SyntaxKind::MinusToken
        | SyntaxKind::AsteriskToken
        | SyntaxKind::SlashToken
        | SyntaxKind::PercentToken
        | SyntaxKind::PlusPlusToken
        | SyntaxKind::MinusMinusToken
        | SyntaxKind::ExclamationToken
        | SyntaxKind::AmpersandAmpersandToken
        | SyntaxKind::BarBarToken
        | SyntaxKind::BarToken
        | SyntaxKind::EqualsToken
        | SyntaxKind::PlusEqualsToken
        | SyntaxKind::MinusEqualsToken
        | SyntaxKind::AsteriskEqualsToken
        | SyntaxKind::SlashEqualsToken => Route::Skip,

        SyntaxKind::Identifier => Route::Visit(literals::visit_literal_value),

        SyntaxKind::ClassKeyword
        | SyntaxKind::ConstKeyword
        | SyntaxKind::ExtendsKeyword
        | SyntaxKind::ImplementsKeyword
        | SyntaxKind::InterfaceKeyword
        | SyntaxKind::LetKeyword
        | SyntaxKind::VarKeyword
        | SyntaxKind::DebuggerKeyword => Route::Skip,
        SyntaxKind::FalseKeyword
        | SyntaxKind::NullKeyword
        | SyntaxKind::ThisKeyword
        | SyntaxKind::TrueKeyword => Route::Visit(literals::visit_literal_value),
        SyntaxKind::SuperKeyword => Route::Unmapped,

        SyntaxKind::AbstractKeyword
        | SyntaxKind::DeclareKeyword
        | SyntaxKind::ExportKeyword
        | SyntaxKind::PrivateKeyword
        | SyntaxKind::ProtectedKeyword
        | SyntaxKind::PublicKeyword
        | SyntaxKind::ReadonlyKeyword
        | SyntaxKind::StaticKeyword => Route::Skip,

        SyntaxKind::AnyKeyword
        | SyntaxKind::BooleanKeyword
        | SyntaxKind::NeverKeyword
        | SyntaxKind::NumberKeyword
        | SyntaxKind::ObjectKeyword
        | SyntaxKind::StringKeyword
        | SyntaxKind::UndefinedKeyword
        | SyntaxKind::UnknownKeyword
        | SyntaxKind::VoidKeyword => Route::Skip,

        SyntaxKind::Parameter | SyntaxKind::IndexSignature => Route::Skip,
        SyntaxKind::PropertySignature => Route::Visit(interface::visit_property_signature),
        SyntaxKind::PropertyDeclaration => Route::Visit(property::visit_property_declaration),
        SyntaxKind::MethodSignature => Route::Visit(interface::visit_method_signature),
        SyntaxKind::MethodDeclaration => Route::Visit(functions::visit_method_declaration),
        SyntaxKind::Constructor => Route::Visit(functions::visit_constructor),

        SyntaxKind::TypeReference
        | SyntaxKind::TypeLiteral
        | SyntaxKind::ArrayType
        | SyntaxKind::UnionType
        | SyntaxKind::ParenthesizedType
        | SyntaxKind::ExpressionWithTypeArguments => Route::Skip,

        SyntaxKind::ArrayLiteralExpression
        | SyntaxKind::ObjectLiteralExpression
        | SyntaxKind::NewExpression => Route::Visit(visit_unsupported),
        SyntaxKind::PropertyAccessExpression | SyntaxKind::ElementAccessExpression => {
            Route::Visit(literals::visit_literal_value)
        }
        SyntaxKind::CallExpression => Route::Visit(calls::visit_call_expression),
        SyntaxKind::ParenthesizedExpression => Route::PassThrough,
        SyntaxKind::PrefixUnaryExpression | SyntaxKind::PostfixUnaryExpression => {
            Route::Visit(binary::visit_unary_expression)
        }
        SyntaxKind::BinaryExpression => Route::Visit(binary::visit_binary_expression),
        SyntaxKind::ClassExpression => Route::Visit(class::visit_class),

        SyntaxKind::Block => Route::PassThrough,
        SyntaxKind::EmptyStatement => Route::Skip,
        SyntaxKind::VariableStatement | SyntaxKind::VariableDeclarationList => Route::PassThrough,
        SyntaxKind::ExpressionStatement => Route::PassThrough,
        SyntaxKind::IfStatement => Route::Visit(control_flow::visit_if_statement),
        SyntaxKind::ForStatement => Route::Visit(control_flow::visit_for_statement),
        SyntaxKind::ReturnStatement => Route::Visit(functions::visit_return_statement),
        SyntaxKind::DebuggerStatement => Route::Unmapped,

        SyntaxKind::VariableDeclaration => Route::Visit(variable::visit_variable_declaration),
        SyntaxKind::FunctionDeclaration => Route::Visit(visit_unsupported),
        SyntaxKind::ClassDeclaration => Route::Visit(class::visit_class),
        SyntaxKind::InterfaceDeclaration => Route::Visit(interface::visit_interface),
        SyntaxKind::HeritageClause => Route::Skip,

        SyntaxKind::SourceFile | SyntaxKind::SyntaxList => Route::PassThrough,
    }
}

/// Result of visiting a node in value position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueOutcome<T = Argument> {
    Value(T),
    /// The value could not be represented; callers surface these instead of
    /// their own output.
    Complaints(Vec<Complaint>),
}

/// Drives one traversal: dispatch, revisit and depth bookkeeping.
pub struct NodeVisitRouter<'a> {
    ctx: VisitorContext<'a>,
    visited: FxHashSet<NodeIndex>,
    depth: usize,
}

impl<'a> NodeVisitRouter<'a> {
    pub fn new(ctx: VisitorContext<'a>) -> NodeVisitRouter<'a> {
        NodeVisitRouter {
            ctx,
            visited: FxHashSet::default(),
            depth: 0,
        }
    }

    pub fn ctx(&self) -> &VisitorContext<'a> {
        &self.ctx
    }

    pub fn arena(&self) -> &'a NodeArena {
        self.ctx.arena
    }

    /// Whether the router has already dispatched `node`.
    pub fn has_visited(&self, node: NodeIndex) -> bool {
        self.visited.contains(&node)
    }

    /// Fragments for one node. Each node may be dispatched once.
    pub fn recurse_into_node(&mut self, node: NodeIndex) -> Result<Vec<Fragment>, TransformError> {
        let arena = self.ctx.arena;
        let Some(data) = arena.get(node) else {
            return Err(TransformError::MissingNode(node));
        };
        let (kind, span) = (data.kind, data.span());
        if !self.visited.insert(node) {
            return Err(TransformError::Revisited { kind, span });
        }
        if self.depth >= MAX_VISIT_DEPTH {
            return Err(TransformError::DepthExceeded {
                span,
                depth: self.depth,
            });
        }

        self.depth += 1;
        let result = self.dispatch(node, kind);
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, node: NodeIndex, kind: SyntaxKind) -> Result<Vec<Fragment>, TransformError> {
        let route = route_for_kind(kind);
        trace!(node = node.0, ?kind, ?route, depth = self.depth, "dispatch");
        match route {
            Route::Visit(handler) => Ok(handler(self, node)?.into_iter().collect()),
            Route::PassThrough => {
                let children = self.ctx.arena.children(node);
                self.recurse_into_nodes(&children)
            }
            Route::Skip => Ok(Vec::new()),
            Route::Unmapped => {
                let children = self.ctx.arena.children(node);
                if children.is_empty() {
                    debug!(node = node.0, ?kind, "no mapping for leaf node");
                    Ok(vec![self.unsupported(node)])
                } else {
                    self.recurse_into_nodes(&children)
                }
            }
        }
    }

    /// Fragments for several nodes, concatenated in input order.
    pub fn recurse_into_nodes(&mut self, nodes: &[NodeIndex]) -> Result<Vec<Fragment>, TransformError> {
        let mut fragments = Vec::new();
        for node in nodes {
            fragments.extend(self.recurse_into_node(*node)?);
        }
        Ok(fragments)
    }

    /// Visit a node in value position.
    ///
    /// A single output line becomes the value. Any complaint is returned
    /// instead, and so is output spanning several lines. No output falls back
    /// to the node's source text.
    pub fn recurse_into_value(&mut self, node: NodeIndex) -> Result<ValueOutcome, TransformError> {
        let fragments = self.recurse_into_node(node)?;
        let mut program = TransformationsPrinter::new().print(&fragments);
        if !program.complaints.is_empty() {
            return Ok(ValueOutcome::Complaints(program.complaints));
        }
        if program.lines.len() > 1 {
            let kind = self.ctx.arena.kind(node).unwrap_or(SyntaxKind::Unknown);
            let words = self.ctx.casing.words(&format!("{kind:?}"));
            return Ok(ValueOutcome::Complaints(vec![Complaint::new(
                self.ctx.arena.span(node),
                format!("{words} cannot be used as a value"),
            )]));
        }
        let value = match program.lines.pop() {
            Some(Line::Command(command)) if program.lines.is_empty() => Argument::Command(command),
            Some(Line::Literal(text)) if program.lines.is_empty() => Argument::Text(text),
            _ => Argument::text(self.ctx.arena.node_text(node)),
        };
        Ok(ValueOutcome::Value(value))
    }

    /// Values of several nodes in order; all complaints when any fail.
    pub fn recurse_into_values(
        &mut self,
        nodes: &[NodeIndex],
    ) -> Result<ValueOutcome<Vec<Argument>>, TransformError> {
        let mut values = Vec::with_capacity(nodes.len());
        let mut complaints = Vec::new();
        for node in nodes {
            match self.recurse_into_value(*node)? {
                ValueOutcome::Value(value) => values.push(value),
                ValueOutcome::Complaints(found) => complaints.extend(found),
            }
        }
        if complaints.is_empty() {
            Ok(ValueOutcome::Value(values))
        } else {
            Ok(ValueOutcome::Complaints(complaints))
        }
    }

    /// Complaint fragment covering `node`.
    pub fn complaint(&self, node: NodeIndex, reason: impl Into<String>) -> Fragment {
        Fragment::Complaint(Complaint::new(self.ctx.arena.span(node), reason))
    }

    /// "<kind in words> is not supported".
    pub fn unsupported(&self, node: NodeIndex) -> Fragment {
        let kind = self.ctx.arena.kind(node).unwrap_or(SyntaxKind::Unknown);
        let words = self.ctx.casing.words(&format!("{kind:?}"));
        self.complaint(node, format!("{words} is not supported"))
    }

    /// Surface complaints from a node's children as the node's own result.
    pub fn surface(&self, node: NodeIndex, complaints: Vec<Complaint>) -> Fragment {
        Fragment::Transformation(Transformation::new(
            self.ctx.arena.span(node),
            complaints.into_iter().map(Output::Complaint).collect(),
        ))
    }

    pub fn span(&self, node: NodeIndex) -> Span {
        self.ctx.arena.span(node)
    }
}

/// Handler for constructs that have a syntax kind but no GLS mapping.
pub fn visit_unsupported(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    Ok(Some(router.unsupported(node)))
}

#[cfg(test)]
#[path = "../tests/router.rs"]
mod tests;
