//! Centralized limits for the transformation core.
//!
//! The router and the friendly-type resolver both recurse over caller-supplied
//! trees. These bounds turn pathological input into a reported failure instead
//! of a stack overflow.

/// Maximum router recursion depth.
///
/// Exceeding it aborts the transform with `TransformError::DepthExceeded`.
///
/// # TypeScript example
///
/// ```typescript
/// // Deeply nested expressions recurse once per level:
/// const x = ((((((((((1 + 2) + 3) + 4) /* ... 500 levels ... */))))));
/// ```
pub const MAX_VISIT_DEPTH: usize = 500;

/// Maximum depth for friendly-type resolution.
///
/// Symbol-backed resolution follows value declarations, which can chain
/// (`const b = a; const c = b; ...`). Past this depth the resolver answers
/// "no representable type".
pub const MAX_TYPE_RESOLUTION_DEPTH: usize = 64;

/// Maximum nesting accepted by the raw type-text parser (`Map<Map<...>>`).
pub const MAX_RAW_TYPE_NESTING: usize = 32;
