//! Declared modifier flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifiers written on a declaration, as declared in source.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ModifierFlags: u16 {
        const EXPORT = 1 << 0;
        const DECLARE = 1 << 1;
        const PUBLIC = 1 << 2;
        const PRIVATE = 1 << 3;
        const PROTECTED = 1 << 4;
        const STATIC = 1 << 5;
        const READONLY = 1 << 6;
        const ABSTRACT = 1 << 7;
        /// `const` on a variable declaration list.
        const CONST = 1 << 8;
        /// `let` on a variable declaration list.
        const LET = 1 << 9;
    }
}
