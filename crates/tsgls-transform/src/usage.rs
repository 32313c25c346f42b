//! Where each variable name is read and written.

use rustc_hash::FxHashMap;
use tsgls_common::Span;
use tsgls_syntax::{NodeArena, NodeData, NodeIndex, SyntaxKind};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VariableUsage {
    pub reads: Vec<NodeIndex>,
    pub writes: Vec<NodeIndex>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Access {
    Read,
    Write,
    /// Names of classes, members, property accesses: not variables.
    Name,
}

/// Identifier reads and writes by name, built in one walk of a tree.
#[derive(Clone, Debug, Default)]
pub struct VariableUsageIndex {
    usages: FxHashMap<String, VariableUsage>,
    spans: FxHashMap<NodeIndex, Span>,
}

impl VariableUsageIndex {
    pub fn build(arena: &NodeArena, root: NodeIndex) -> VariableUsageIndex {
        let mut index = VariableUsageIndex::default();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if let Some(name) = arena.identifier_text(node) {
                let access = classify(arena, node);
                if access == Access::Name {
                    continue;
                }
                let usage = index.usages.entry(name.to_string()).or_default();
                if access == Access::Write {
                    usage.writes.push(node);
                } else {
                    usage.reads.push(node);
                }
                index.spans.insert(node, arena.span(node));
                continue;
            }
            stack.extend(arena.children(node).into_iter().rev());
        }
        index
    }

    pub fn usage(&self, name: &str) -> Option<&VariableUsage> {
        self.usages.get(name)
    }

    /// Whether `name` is written anywhere inside `range`.
    pub fn writes_within(&self, name: &str, range: Span) -> bool {
        self.usage(name).is_some_and(|usage| {
            usage.writes.iter().any(|write| {
                self.spans
                    .get(write)
                    .is_some_and(|span| range.contains_span(*span))
            })
        })
    }

    /// Whether `name` is read anywhere inside `range`.
    pub fn reads_within(&self, name: &str, range: Span) -> bool {
        self.usage(name).is_some_and(|usage| {
            usage.reads.iter().any(|read| {
                self.spans
                    .get(read)
                    .is_some_and(|span| range.contains_span(*span))
            })
        })
    }
}

fn classify(arena: &NodeArena, node: NodeIndex) -> Access {
    let Some(parent) = arena.parent(node) else {
        return Access::Read;
    };
    let Some(parent_node) = arena.get(parent) else {
        return Access::Read;
    };
    match (&parent_node.data, parent_node.kind) {
        (
            NodeData::ValueDecl(decl),
            SyntaxKind::VariableDeclaration | SyntaxKind::Parameter,
        ) if decl.name == node => Access::Write,
        (NodeData::ValueDecl(decl), _) if decl.name == node => Access::Name,
        (NodeData::Class(class), _) if class.name == Some(node) => Access::Name,
        (NodeData::Interface(interface), _) if interface.name == node => Access::Name,
        (NodeData::Function(function), _) if function.name == Some(node) => Access::Name,
        (NodeData::Access(access), SyntaxKind::PropertyAccessExpression)
            if access.name_or_argument == node =>
        {
            Access::Name
        }
        (NodeData::Binary(binary), _)
            if binary.left == node && binary.operator.is_assignment_operator() =>
        {
            Access::Write
        }
        (NodeData::Unary(unary), _)
            if matches!(
                unary.operator,
                SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
            ) =>
        {
            Access::Write
        }
        _ => Access::Read,
    }
}

#[cfg(test)]
#[path = "../tests/usage.rs"]
mod tests;
