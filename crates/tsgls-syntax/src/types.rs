//! Type-query boundary.
//!
//! Static types and symbol bindings come from an external typechecker. The
//! core consults them through `TypeQuery` and never mutates them. `TypeTable`
//! is a plain, serializable implementation: a producer records the checker's
//! answers per node and the core reads them back.

use crate::NodeIndex;
use bitflags::bitflags;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolId(pub u32);

bitflags! {
    /// Classification flags of a resolved type, after TypeScript's `TypeFlags`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const ENUM = 1 << 5;
        const BIGINT = 1 << 6;
        const STRING_LITERAL = 1 << 7;
        const NUMBER_LITERAL = 1 << 8;
        const BOOLEAN_LITERAL = 1 << 9;
        const ENUM_LITERAL = 1 << 10;
        const VOID = 1 << 11;
        const UNDEFINED = 1 << 12;
        const NULL = 1 << 13;
        const NEVER = 1 << 14;
        const TYPE_PARAMETER = 1 << 15;
        const OBJECT = 1 << 16;
        const UNION = 1 << 17;
        const INTERSECTION = 1 << 18;

        const STRING_LIKE = Self::STRING.bits() | Self::STRING_LITERAL.bits();
        const NUMBER_LIKE = Self::NUMBER.bits() | Self::NUMBER_LITERAL.bits();
        const BOOLEAN_LIKE = Self::BOOLEAN.bits() | Self::BOOLEAN_LITERAL.bits();
    }
}

/// A named binding.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    /// Declaration that introduces the symbol's value, if any.
    #[serde(default)]
    pub value_declaration: Option<NodeIndex>,
}

/// One call signature of a callable type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub return_type: TypeId,
}

/// Everything the checker reports about one type.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TypeData {
    pub flags: TypeFlags,
    #[serde(default)]
    pub symbol: Option<SymbolId>,
    /// Intrinsic name for primitive types (`number`, `void`, ...).
    #[serde(default)]
    pub intrinsic_name: Option<String>,
    /// Literal value text for literal types (`1`, `2.5`, `"a"`).
    #[serde(default)]
    pub literal_value: Option<String>,
    #[serde(default)]
    pub call_signatures: Vec<Signature>,
}

/// Read-only capability over the typechecker's results.
pub trait TypeQuery {
    fn type_at_node(&self, node: NodeIndex) -> Option<TypeId>;

    fn symbol_at_node(&self, node: NodeIndex) -> Option<SymbolId>;

    fn type_flags(&self, ty: TypeId) -> TypeFlags;

    /// Symbol attached to a type, such as a class for its instance type.
    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId>;

    fn symbol(&self, id: SymbolId) -> Option<&Symbol>;

    fn call_signatures(&self, ty: TypeId) -> &[Signature];

    fn intrinsic_name(&self, ty: TypeId) -> Option<&str>;

    fn literal_value(&self, ty: TypeId) -> Option<&str>;
}

/// In-memory `TypeQuery` implementation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TypeTable {
    #[serde(default)]
    pub types: Vec<TypeData>,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub node_types: FxHashMap<NodeIndex, TypeId>,
    #[serde(default)]
    pub node_symbols: FxHashMap<NodeIndex, SymbolId>,
}

impl TypeTable {
    pub fn new() -> TypeTable {
        TypeTable::default()
    }

    pub fn add_type(&mut self, data: TypeData) -> TypeId {
        self.types.push(data);
        TypeId(self.types.len() as u32 - 1)
    }

    /// Intrinsic primitive with the given flags and name.
    pub fn add_intrinsic(&mut self, flags: TypeFlags, name: &str) -> TypeId {
        self.add_type(TypeData {
            flags,
            intrinsic_name: Some(name.to_string()),
            ..TypeData::default()
        })
    }

    /// Number literal type such as `1` or `2.5`.
    pub fn add_number_literal(&mut self, value: &str) -> TypeId {
        self.add_type(TypeData {
            flags: TypeFlags::NUMBER_LITERAL,
            literal_value: Some(value.to_string()),
            ..TypeData::default()
        })
    }

    /// Object type backed by a named symbol (a class or interface instance).
    pub fn add_object(&mut self, symbol: SymbolId) -> TypeId {
        self.add_type(TypeData {
            flags: TypeFlags::OBJECT,
            symbol: Some(symbol),
            ..TypeData::default()
        })
    }

    /// Callable object type.
    pub fn add_function(&mut self, signatures: Vec<Signature>) -> TypeId {
        self.add_type(TypeData {
            flags: TypeFlags::OBJECT,
            call_signatures: signatures,
            ..TypeData::default()
        })
    }

    pub fn add_symbol(&mut self, name: &str, value_declaration: Option<NodeIndex>) -> SymbolId {
        self.symbols.push(Symbol {
            name: name.to_string(),
            value_declaration,
        });
        SymbolId(self.symbols.len() as u32 - 1)
    }

    pub fn set_node_type(&mut self, node: NodeIndex, ty: TypeId) {
        self.node_types.insert(node, ty);
    }

    pub fn set_node_symbol(&mut self, node: NodeIndex, symbol: SymbolId) {
        self.node_symbols.insert(node, symbol);
    }

    fn data(&self, ty: TypeId) -> Option<&TypeData> {
        self.types.get(ty.0 as usize)
    }
}

impl TypeQuery for TypeTable {
    fn type_at_node(&self, node: NodeIndex) -> Option<TypeId> {
        self.node_types.get(&node).copied()
    }

    fn symbol_at_node(&self, node: NodeIndex) -> Option<SymbolId> {
        self.node_symbols.get(&node).copied()
    }

    fn type_flags(&self, ty: TypeId) -> TypeFlags {
        self.data(ty).map(|data| data.flags).unwrap_or_default()
    }

    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId> {
        self.data(ty)?.symbol
    }

    fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0 as usize)
    }

    fn call_signatures(&self, ty: TypeId) -> &[Signature] {
        self.data(ty)
            .map(|data| data.call_signatures.as_slice())
            .unwrap_or(&[])
    }

    fn intrinsic_name(&self, ty: TypeId) -> Option<&str> {
        self.data(ty)?.intrinsic_name.as_deref()
    }

    fn literal_value(&self, ty: TypeId) -> Option<&str> {
        self.data(ty)?.literal_value.as_deref()
    }
}

#[cfg(test)]
#[path = "../tests/types.rs"]
mod tests;
