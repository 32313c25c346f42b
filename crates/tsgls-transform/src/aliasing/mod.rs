//! Friendly type names.
//!
//! `RootAliaser` answers "what is this node's type, in IR vocabulary?" by
//! trying an ordered chain of strategies. Each strategy either settles the
//! answer (possibly with "no representable type") or passes to the next one.

mod flags;
mod known;
pub mod raw_types;
mod return_types;

pub use flags::alias_type_flags;
pub use raw_types::parse_raw_type;
pub use return_types::find_return_statements;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{trace, warn};
use tsgls_common::limits::MAX_TYPE_RESOLUTION_DEPTH;
use tsgls_ir::Argument;
use tsgls_syntax::{ModifierFlags, NodeArena, NodeIndex, SyntaxKind, TypeQuery};

/// A plain type name (`float`, `Point`) or a nested type command
/// (`list type : float`).
pub type TypeName = Argument;

/// Outcome of one resolution strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The strategy applies; its answer is final, even when empty.
    Settled(Option<TypeName>),
    /// The strategy does not apply to this node.
    Next,
}

impl From<Option<TypeName>> for Step {
    fn from(name: Option<TypeName>) -> Self {
        Step::Settled(name)
    }
}

pub type Strategy = fn(&RootAliaser<'_>, NodeIndex, usize) -> Step;

/// Resolution strategies, in the order they are tried.
pub const STRATEGIES: [(&str, Strategy); 7] = [
    ("known kind", known::known_kind),
    ("pass-through", pass_through),
    ("type flags", type_flags),
    ("value declaration", value_declaration),
    ("declared annotation", declared_annotation),
    ("raw type text", raw_type_text),
    ("type symbol", type_symbol_name),
];

/// Declarations whose symbol's type is resolved through the declaration.
const VALUE_DECLARATION_KINDS: [SyntaxKind; 3] = [
    SyntaxKind::Parameter,
    SyntaxKind::PropertyDeclaration,
    SyntaxKind::VariableDeclaration,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Protected,
    Private,
}

impl Privacy {
    pub fn as_str(self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Protected => "protected",
            Privacy::Private => "private",
        }
    }

    /// Private wins over protected, which wins over public.
    pub fn from_modifiers(modifiers: ModifierFlags) -> Privacy {
        if modifiers.contains(ModifierFlags::PRIVATE) {
            Privacy::Private
        } else if modifiers.contains(ModifierFlags::PROTECTED) {
            Privacy::Protected
        } else {
            Privacy::Public
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Friendly-name resolver over one document's arena and types.
#[derive(Clone, Copy)]
pub struct RootAliaser<'a> {
    pub(crate) arena: &'a NodeArena,
    pub(crate) types: &'a dyn TypeQuery,
}

impl<'a> RootAliaser<'a> {
    pub fn new(arena: &'a NodeArena, types: &'a dyn TypeQuery) -> RootAliaser<'a> {
        RootAliaser { arena, types }
    }

    pub fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    /// The node's type in IR vocabulary, or `None` when it has no
    /// representable type.
    pub fn friendly_type_name(&self, node: NodeIndex) -> Option<TypeName> {
        self.resolve(node, 0)
    }

    pub(crate) fn resolve(&self, node: NodeIndex, depth: usize) -> Option<TypeName> {
        if depth > MAX_TYPE_RESOLUTION_DEPTH {
            warn!(node = node.0, depth, "type resolution depth exceeded");
            return None;
        }
        self.arena.get(node)?;
        for (name, strategy) in STRATEGIES {
            if let Step::Settled(result) = strategy(self, node, depth + 1) {
                trace!(node = node.0, strategy = name, ?result, "resolved friendly type");
                return result;
            }
        }
        None
    }

    /// Privacy from declared modifiers only.
    pub fn friendly_privacy_name(&self, node: NodeIndex) -> Privacy {
        Privacy::from_modifiers(self.arena.modifiers(node))
    }

    /// Return type of a function-like node: the common type of its own
    /// return statements, else its return annotation, else the return type
    /// of its single call signature.
    ///
    /// Bodiless signatures have no return statements to agree on and start
    /// at the annotation.
    pub fn friendly_return_type_name(&self, node: NodeIndex) -> Option<TypeName> {
        let function = self.arena.get_function(node);
        if function.is_some_and(|function| function.body.is_some()) {
            let returns = find_return_statements(self.arena, node);
            if let Some(common) = self.common_return_type(&returns) {
                return Some(common);
            }
        }

        if let Some(annotation) = function.and_then(|function| function.type_annotation) {
            return self.friendly_type_name(annotation);
        }

        self.signature_return_type(node)
    }

    /// Shared friendly type of every return statement's value.
    ///
    /// No returns is `void`. A bare `return` first, a bare `return` later, or
    /// any disagreement between values gives `None`.
    pub fn common_return_type(&self, returns: &[NodeIndex]) -> Option<TypeName> {
        let Some((first, rest)) = returns.split_first() else {
            return Some(TypeName::text("void"));
        };
        let common = self.friendly_type_name(self.returned_value(*first)?)?;
        for statement in rest {
            let value = self.returned_value(*statement)?;
            if self.friendly_type_name(value).as_ref() != Some(&common) {
                return None;
            }
        }
        Some(common)
    }

    fn returned_value(&self, statement: NodeIndex) -> Option<NodeIndex> {
        self.arena.get_wrapped(statement)
    }

    fn signature_return_type(&self, node: NodeIndex) -> Option<TypeName> {
        let ty = self.types.type_at_node(node)?;
        let [signature] = self.types.call_signatures(ty) else {
            return None;
        };
        if let Some(symbol) = self
            .types
            .type_symbol(signature.return_type)
            .and_then(|id| self.types.symbol(id))
        {
            return Some(TypeName::text(symbol.name.as_str()));
        }
        self.types
            .intrinsic_name(signature.return_type)
            .map(TypeName::text)
    }
}

fn pass_through(aliaser: &RootAliaser<'_>, node: NodeIndex, depth: usize) -> Step {
    match aliaser.arena.kind(node) {
        Some(
            SyntaxKind::ExpressionStatement
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::ParenthesizedType
            | SyntaxKind::SyntaxList,
        ) => {
            // Childless wrappers are raw type text; later strategies parse it.
            match aliaser.arena.children(node).first() {
                Some(child) => Step::Settled(aliaser.resolve(*child, depth)),
                None => Step::Next,
            }
        }
        _ => Step::Next,
    }
}

fn type_flags(aliaser: &RootAliaser<'_>, node: NodeIndex, _depth: usize) -> Step {
    match aliaser.types.type_at_node(node) {
        Some(ty) => match alias_type_flags(aliaser.types, ty) {
            Some(name) => Step::Settled(Some(name)),
            None => Step::Next,
        },
        None => Step::Next,
    }
}

fn value_declaration(aliaser: &RootAliaser<'_>, node: NodeIndex, depth: usize) -> Step {
    let declaration = aliaser
        .types
        .symbol_at_node(node)
        .and_then(|id| aliaser.types.symbol(id))
        .and_then(|symbol| symbol.value_declaration);
    match declaration {
        Some(declaration)
            if declaration != node
                && aliaser
                    .arena
                    .kind(declaration)
                    .is_some_and(|kind| VALUE_DECLARATION_KINDS.contains(&kind)) =>
        {
            Step::Settled(aliaser.resolve(declaration, depth))
        }
        _ => Step::Next,
    }
}

fn declared_annotation(aliaser: &RootAliaser<'_>, node: NodeIndex, depth: usize) -> Step {
    let is_declaration = aliaser
        .arena
        .kind(node)
        .is_some_and(|kind| VALUE_DECLARATION_KINDS.contains(&kind));
    if !is_declaration {
        return Step::Next;
    }
    match aliaser
        .arena
        .get_value_decl(node)
        .and_then(|decl| decl.type_annotation)
    {
        Some(annotation) => Step::Settled(aliaser.resolve(annotation, depth)),
        None => Step::Next,
    }
}

fn raw_type_text(aliaser: &RootAliaser<'_>, node: NodeIndex, _depth: usize) -> Step {
    match aliaser.arena.kind(node) {
        Some(kind) if kind.is_type_node() => {
            Step::Settled(parse_raw_type(aliaser.arena.node_text(node)))
        }
        _ => Step::Next,
    }
}

fn type_symbol_name(aliaser: &RootAliaser<'_>, node: NodeIndex, _depth: usize) -> Step {
    let symbol = aliaser
        .types
        .type_at_node(node)
        .and_then(|ty| aliaser.types.type_symbol(ty))
        .and_then(|id| aliaser.types.symbol(id));
    match symbol {
        Some(symbol) if symbol.value_declaration.is_some() => {
            Step::Settled(Some(TypeName::text(symbol.name.as_str())))
        }
        _ => Step::Next,
    }
}

#[cfg(test)]
#[path = "../../tests/aliasing.rs"]
mod tests;
