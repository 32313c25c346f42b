//! Primitive names from type flags.

use super::TypeName;
use super::known::numeric_literal_type;
use tsgls_syntax::{TypeFlags, TypeId, TypeQuery};

/// Friendly name of a primitive type, or `None` for anything richer.
///
/// Number literals keep the `int`/`float` distinction TypeScript's `number`
/// erases.
pub fn alias_type_flags(types: &dyn TypeQuery, ty: TypeId) -> Option<TypeName> {
    let flags = types.type_flags(ty);
    if flags.intersects(TypeFlags::BOOLEAN_LIKE) {
        return Some(TypeName::text("boolean"));
    }
    if flags.intersects(TypeFlags::STRING_LIKE) {
        return Some(TypeName::text("string"));
    }
    if flags.contains(TypeFlags::NUMBER_LITERAL) {
        if let Some(value) = types.literal_value(ty) {
            return Some(numeric_literal_type(value));
        }
    }
    if flags.intersects(TypeFlags::NUMBER_LIKE) {
        return Some(TypeName::text("float"));
    }
    if flags.contains(TypeFlags::VOID) {
        return Some(TypeName::text("void"));
    }
    None
}
