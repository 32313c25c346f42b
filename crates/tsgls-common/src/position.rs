//! Line/column positions for human-facing reports.

use serde::{Deserialize, Serialize};

/// Zero-based line and character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

/// Precomputed line start offsets for a source text.
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map. `\r\n`, `\r` and `\n` all end a line.
    pub fn build(text: &str) -> LineMap {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' => {
                    if i + 1 < bytes.len() && bytes[i + 1] == b'\n' {
                        i += 1;
                    }
                    line_starts.push(i as u32 + 1);
                }
                b'\n' => line_starts.push(i as u32 + 1),
                _ => {}
            }
            i += 1;
        }
        LineMap { line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the last line.
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let start = self.line_starts.get(line).copied().unwrap_or(0);
        Position::new(line as u32, offset.saturating_sub(start))
    }
}

#[cfg(test)]
#[path = "../tests/position.rs"]
mod tests;
