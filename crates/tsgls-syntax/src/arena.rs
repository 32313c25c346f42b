//! The read-only node arena consumed by the transformation core.

use crate::node::*;
use crate::{ModifierFlags, SyntaxKind};
use serde::{Deserialize, Serialize};
use tsgls_common::Span;

/// Flat storage of one source file's syntax tree.
///
/// Producers (a parser, the `TreeBuilder`, or a deserialized document) append
/// nodes; consumers only read. `source_text` backs `node_text`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub source_text: String,
    pub nodes: Vec<Node>,
}

macro_rules! typed_getter {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&self, idx: NodeIndex) -> Option<&$ty> {
            match &self.get(idx)?.data {
                NodeData::$variant(data) => Some(data),
                _ => None,
            }
        }
    };
}

impl NodeArena {
    pub fn new(source_text: impl Into<String>) -> NodeArena {
        NodeArena {
            source_text: source_text.into(),
            nodes: Vec::new(),
        }
    }

    /// Append a node. Children referenced by `data` get `parent` set to it.
    pub fn add_node(&mut self, kind: SyntaxKind, span: Span, data: NodeData) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        for child in data.children() {
            if let Some(node) = self.nodes.get_mut(child.index()) {
                node.parent = Some(idx);
            }
        }
        self.nodes.push(Node {
            kind,
            pos: span.start,
            end: span.end,
            parent: None,
            modifiers: ModifierFlags::empty(),
            data,
        });
        idx
    }

    pub fn set_modifiers(&mut self, idx: NodeIndex, modifiers: ModifierFlags) {
        if let Some(node) = self.nodes.get_mut(idx.index()) {
            node.modifiers = modifiers;
        }
    }

    /// Recompute every parent link from node payloads.
    ///
    /// Deserialized documents may omit parents; call this once after loading.
    pub fn link_parents(&mut self) {
        for i in 0..self.nodes.len() {
            let children = self.nodes[i].data.children();
            for child in children {
                if let Some(node) = self.nodes.get_mut(child.index()) {
                    node.parent = Some(NodeIndex(i as u32));
                }
            }
        }
    }

    #[inline]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn kind(&self, idx: NodeIndex) -> Option<SyntaxKind> {
        self.get(idx).map(|node| node.kind)
    }

    pub fn span(&self, idx: NodeIndex) -> Span {
        self.get(idx).map(Node::span).unwrap_or_default()
    }

    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.get(idx)?.parent
    }

    /// Declared modifiers of a node (empty for unknown nodes).
    pub fn modifiers(&self, idx: NodeIndex) -> ModifierFlags {
        self.get(idx).map(|node| node.modifiers).unwrap_or_default()
    }

    pub fn children(&self, idx: NodeIndex) -> NodeChildren {
        self.get(idx)
            .map(|node| node.data.children())
            .unwrap_or_default()
    }

    /// The node's source text, like TypeScript's `getText()`.
    ///
    /// Identifiers and literals fall back to their payload text when the
    /// span does not index into `source_text`.
    pub fn node_text(&self, idx: NodeIndex) -> &str {
        let Some(node) = self.get(idx) else {
            return "";
        };
        let text = node.span().slice(&self.source_text);
        if !text.is_empty() {
            return text;
        }
        match &node.data {
            NodeData::Identifier(data) => &data.escaped_text,
            NodeData::Literal(data) => &data.text,
            _ => node.kind.token_text().unwrap_or(""),
        }
    }

    /// Text of an identifier node.
    pub fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        self.get_identifier(idx).map(|data| data.escaped_text.as_str())
    }

    typed_getter!(get_identifier, Identifier, IdentifierData);
    typed_getter!(get_literal, Literal, LiteralData);
    typed_getter!(
        /// Elements of a list-shaped node.
        get_list, List, Vec<NodeIndex>
    );
    typed_getter!(get_class, Class, ClassData);
    typed_getter!(get_interface, Interface, InterfaceData);
    typed_getter!(get_heritage, Heritage, HeritageData);
    typed_getter!(get_expr_with_type_args, ExprWithTypeArgs, ExprWithTypeArgsData);
    typed_getter!(
        /// Parameters, properties, property signatures and variable declarations.
        get_value_decl, ValueDecl, ValueDeclData
    );
    typed_getter!(get_function, Function, FunctionData);
    typed_getter!(get_call, Call, CallData);
    typed_getter!(get_access, Access, AccessData);
    typed_getter!(get_binary, Binary, BinaryData);
    typed_getter!(get_unary, Unary, UnaryData);
    typed_getter!(get_if, If, IfData);
    typed_getter!(get_loop, Loop, LoopData);
    typed_getter!(get_type_ref, TypeRef, TypeRefData);
    typed_getter!(get_index_signature, IndexSignature, IndexSignatureData);

    /// Inner node of a single-child wrapper.
    pub fn get_wrapped(&self, idx: NodeIndex) -> Option<NodeIndex> {
        match &self.get(idx)?.data {
            NodeData::Wrapped(inner) => *inner,
            _ => None,
        }
    }

    /// Nearest ancestor of the given kind.
    pub fn find_ancestor(&self, idx: NodeIndex, kind: SyntaxKind) -> Option<NodeIndex> {
        let mut current = self.parent(idx);
        while let Some(candidate) = current {
            if self.kind(candidate) == Some(kind) {
                return Some(candidate);
            }
            current = self.parent(candidate);
        }
        None
    }
}

#[cfg(test)]
#[path = "../tests/arena.rs"]
mod tests;
