//! Common types and utilities for the tsgls transformation core.
//!
//! This crate provides foundational types used across all tsgls crates:
//! - Source spans (`Span`) tagging nodes, transformations and complaints
//! - Line/column positions (`LineMap`, `Position`) for reporting
//! - Comment range extraction from source text
//! - Recursion limits

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Centralized limits and thresholds
pub mod limits;

// Comment extraction utilities
pub mod comments;
pub use comments::{CommentRange, get_comment_ranges};
