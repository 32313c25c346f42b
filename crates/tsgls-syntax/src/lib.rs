//! Syntax-tree and type-query boundary of the tsgls transformation core.
//!
//! The core never parses or type-checks. It consumes:
//! - a read-only `NodeArena` of `Node`s addressed by `NodeIndex`
//! - a `TypeQuery` answering type, symbol and signature questions
//!
//! `TreeBuilder` and `TypeTable` are producers for both, used by tests, the
//! benchmark, and serialized `SourceDocument`s.

pub mod kind;
pub use kind::SyntaxKind;

pub mod modifiers;
pub use modifiers::ModifierFlags;

pub mod node;
pub use node::{
    AccessData, BinaryData, CallData, ClassData, ExprWithTypeArgsData, FunctionData, HeritageData,
    IdentifierData, IfData, IndexSignatureData, InterfaceData, LiteralData, LoopData, Node,
    NodeChildren, NodeData, NodeIndex, TypeRefData, UnaryData, ValueDeclData,
};

pub mod arena;
pub use arena::NodeArena;

pub mod types;
pub use types::{Signature, Symbol, SymbolId, TypeData, TypeFlags, TypeId, TypeQuery, TypeTable};

pub mod builder;
pub use builder::{Mark, TreeBuilder};

pub mod document;
pub use document::SourceDocument;
