//! Arena node types.
//!
//! A `Node` is a thin header (kind, span, parent, modifiers) plus a typed
//! `NodeData` payload. Ordered children are derived from the payload, so the
//! arena never stores a separate child list that could disagree with it.

use crate::{ModifierFlags, SyntaxKind};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tsgls_common::Span;

/// Index of a node in its `NodeArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub type NodeChildren = SmallVec<[NodeIndex; 4]>;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeIndex>,
    #[serde(default, skip_serializing_if = "ModifierFlags::is_empty")]
    pub modifiers: ModifierFlags,
    #[serde(default)]
    pub data: NodeData,
}

impl Node {
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }
}

/// Identifier payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Literal payload. `text` is the literal's raw source text, quotes included.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// `ClassDeclaration` / `ClassExpression`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClassData {
    pub name: Option<NodeIndex>,
    pub heritage_clauses: Vec<NodeIndex>,
    pub members: Vec<NodeIndex>,
}

/// `InterfaceDeclaration`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InterfaceData {
    pub name: NodeIndex,
    pub heritage_clauses: Vec<NodeIndex>,
    pub members: Vec<NodeIndex>,
}

/// `HeritageClause`: `extends A, B` or `implements C`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeritageData {
    pub token: SyntaxKind,
    pub types: Vec<NodeIndex>,
}

/// `ExpressionWithTypeArguments` inside a heritage clause.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprWithTypeArgsData {
    pub expression: NodeIndex,
    pub type_arguments: Vec<NodeIndex>,
}

/// `PropertyDeclaration`, `PropertySignature`, `Parameter` and `VariableDeclaration`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValueDeclData {
    pub name: NodeIndex,
    pub type_annotation: Option<NodeIndex>,
    pub initializer: Option<NodeIndex>,
}

/// Function-like declarations: methods, method signatures, constructors and
/// function declarations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FunctionData {
    pub name: Option<NodeIndex>,
    pub parameters: Vec<NodeIndex>,
    pub type_annotation: Option<NodeIndex>,
    pub body: Option<NodeIndex>,
}

/// `CallExpression` / `NewExpression`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallData {
    pub expression: NodeIndex,
    pub type_arguments: Vec<NodeIndex>,
    pub arguments: Vec<NodeIndex>,
}

/// `PropertyAccessExpression` (`name_or_argument` is the name identifier) and
/// `ElementAccessExpression` (it is the index expression).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccessData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryData {
    pub left: NodeIndex,
    pub operator: SyntaxKind,
    pub right: NodeIndex,
}

/// Prefix and postfix unary expressions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfData {
    pub condition: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: Option<NodeIndex>,
}

/// `for (initializer; condition; incrementor) statement`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoopData {
    pub initializer: Option<NodeIndex>,
    pub condition: Option<NodeIndex>,
    pub incrementor: Option<NodeIndex>,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeRefData {
    pub type_name: NodeIndex,
    pub type_arguments: Vec<NodeIndex>,
}

/// `[key: K]: V` inside a type literal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexSignatureData {
    pub parameters: Vec<NodeIndex>,
    pub type_annotation: Option<NodeIndex>,
}

/// Typed node payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub enum NodeData {
    /// Tokens and keywords.
    #[default]
    None,
    Identifier(IdentifierData),
    Literal(LiteralData),
    /// Ordered element lists: source files, blocks, syntax lists, declaration
    /// lists, array literals, type literals, union types.
    List(Vec<NodeIndex>),
    /// Single-child wrappers: expression statements, parenthesized
    /// expressions/types, variable statements, array types, return statements.
    Wrapped(Option<NodeIndex>),
    Class(ClassData),
    Interface(InterfaceData),
    Heritage(HeritageData),
    ExprWithTypeArgs(ExprWithTypeArgsData),
    ValueDecl(ValueDeclData),
    Function(FunctionData),
    Call(CallData),
    Access(AccessData),
    Binary(BinaryData),
    Unary(UnaryData),
    If(IfData),
    Loop(LoopData),
    TypeRef(TypeRefData),
    IndexSignature(IndexSignatureData),
}

impl NodeData {
    /// Ordered children in source order.
    pub fn children(&self) -> NodeChildren {
        let mut out = NodeChildren::new();
        match self {
            NodeData::None | NodeData::Identifier(_) | NodeData::Literal(_) => {}
            NodeData::List(elements) => out.extend(elements.iter().copied()),
            NodeData::Wrapped(inner) => out.extend(*inner),
            NodeData::Class(data) => {
                out.extend(data.name);
                out.extend(data.heritage_clauses.iter().copied());
                out.extend(data.members.iter().copied());
            }
            NodeData::Interface(data) => {
                out.push(data.name);
                out.extend(data.heritage_clauses.iter().copied());
                out.extend(data.members.iter().copied());
            }
            NodeData::Heritage(data) => out.extend(data.types.iter().copied()),
            NodeData::ExprWithTypeArgs(data) => {
                out.push(data.expression);
                out.extend(data.type_arguments.iter().copied());
            }
            NodeData::ValueDecl(data) => {
                out.push(data.name);
                out.extend(data.type_annotation);
                out.extend(data.initializer);
            }
            NodeData::Function(data) => {
                out.extend(data.name);
                out.extend(data.parameters.iter().copied());
                out.extend(data.type_annotation);
                out.extend(data.body);
            }
            NodeData::Call(data) => {
                out.push(data.expression);
                out.extend(data.type_arguments.iter().copied());
                out.extend(data.arguments.iter().copied());
            }
            NodeData::Access(data) => {
                out.push(data.expression);
                out.push(data.name_or_argument);
            }
            NodeData::Binary(data) => {
                out.push(data.left);
                out.push(data.right);
            }
            NodeData::Unary(data) => out.push(data.operand),
            NodeData::If(data) => {
                out.push(data.condition);
                out.push(data.then_statement);
                out.extend(data.else_statement);
            }
            NodeData::Loop(data) => {
                out.extend(data.initializer);
                out.extend(data.condition);
                out.extend(data.incrementor);
                out.push(data.statement);
            }
            NodeData::TypeRef(data) => {
                out.push(data.type_name);
                out.extend(data.type_arguments.iter().copied());
            }
            NodeData::IndexSignature(data) => {
                out.extend(data.parameters.iter().copied());
                out.extend(data.type_annotation);
            }
        }
        out
    }
}
