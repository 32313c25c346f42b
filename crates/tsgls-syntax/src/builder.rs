//! Programmatic tree construction.
//!
//! `TreeBuilder` grows the source text and the arena together, so every node's
//! span indexes real text and `NodeArena::node_text` behaves like `getText()`.
//! Composite nodes are opened with `mark()` and closed with `finish()`; the
//! node covers everything appended in between.

use crate::node::*;
use crate::{ModifierFlags, NodeArena, SyntaxKind};
use tsgls_common::Span;

/// Start offset of a node under construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark(u32);

#[derive(Debug, Default)]
pub struct TreeBuilder {
    arena: NodeArena,
}

/// Characters after which the next token is glued on without a space.
fn glues_after(prev: char) -> bool {
    prev.is_whitespace() || matches!(prev, '(' | '[' | '.' | '!')
}

/// Leading characters of text that is glued onto the previous token.
fn glues_before(next: char) -> bool {
    matches!(next, ')' | ']' | ',' | ';' | ':' | '.' | '(' | '[')
}

impl TreeBuilder {
    pub fn new() -> TreeBuilder {
        TreeBuilder::default()
    }

    fn end(&self) -> u32 {
        self.arena.source_text.len() as u32
    }

    /// Append source text, separating it from the previous token with a
    /// space where a formatter would.
    fn push(&mut self, text: &str) -> Span {
        if let (Some(prev), Some(next)) =
            (self.arena.source_text.chars().last(), text.chars().next())
        {
            if !glues_after(prev) && !glues_before(next) {
                self.arena.source_text.push(' ');
            }
        }
        let start = self.end();
        self.arena.source_text.push_str(text);
        Span::new(start, self.end())
    }

    /// Open a composite node at the next token position.
    pub fn mark(&mut self) -> Mark {
        if let Some(prev) = self.arena.source_text.chars().last() {
            if !glues_after(prev) {
                self.arena.source_text.push(' ');
            }
        }
        Mark(self.end())
    }

    /// Append text that is not a node of its own: keywords owned by a
    /// declaration, punctuation, operators.
    pub fn text(&mut self, text: &str) -> &mut TreeBuilder {
        self.push(text);
        self
    }

    /// Append a line break.
    pub fn newline(&mut self) -> &mut TreeBuilder {
        self.arena.source_text.push('\n');
        self
    }

    /// Append a comment exactly as written, followed by a line break.
    pub fn comment(&mut self, text: &str) -> Span {
        let span = self.push(text);
        self.newline();
        span
    }

    pub fn identifier(&mut self, name: &str) -> NodeIndex {
        let span = self.push(name);
        self.arena.add_node(
            SyntaxKind::Identifier,
            span,
            NodeData::Identifier(IdentifierData {
                escaped_text: name.to_string(),
            }),
        )
    }

    /// A literal leaf; `text` is the raw source text (quotes included).
    pub fn literal(&mut self, kind: SyntaxKind, text: &str) -> NodeIndex {
        let span = self.push(text);
        self.arena.add_node(
            kind,
            span,
            NodeData::Literal(LiteralData {
                text: text.to_string(),
            }),
        )
    }

    pub fn numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.literal(SyntaxKind::NumericLiteral, text)
    }

    pub fn string_literal(&mut self, text: &str) -> NodeIndex {
        self.literal(SyntaxKind::StringLiteral, text)
    }

    /// A token or keyword leaf with its fixed text.
    pub fn token(&mut self, kind: SyntaxKind) -> NodeIndex {
        let span = self.push(kind.token_text().unwrap_or(""));
        self.arena.add_node(kind, span, NodeData::None)
    }

    /// A type node kept as verbatim text (`Map<string, number>`, `T[]`).
    pub fn raw_type(&mut self, kind: SyntaxKind, text: &str) -> NodeIndex {
        let span = self.push(text);
        self.arena.add_node(kind, span, NodeData::None)
    }

    /// Close a node opened at `mark`.
    pub fn finish(&mut self, mark: Mark, kind: SyntaxKind, data: NodeData) -> NodeIndex {
        let span = Span::new(mark.0, self.end());
        self.arena.add_node(kind, span, data)
    }

    /// Close a node that starts at its first child.
    pub fn finish_from(&mut self, first: NodeIndex, kind: SyntaxKind, data: NodeData) -> NodeIndex {
        let start = self.arena.span(first).start;
        self.finish(Mark(start), kind, data)
    }

    pub fn set_modifiers(&mut self, node: NodeIndex, modifiers: ModifierFlags) {
        self.arena.set_modifiers(node, modifiers);
    }

    /// Read access to the partially built arena.
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }
}

#[cfg(test)]
#[path = "../tests/builder.rs"]
mod tests;
