//! Comment extraction.
//!
//! Comments are not part of the syntax arena, so they are recovered from the
//! source text separately and turned into comment commands by the comment
//! transformer.

use crate::Span;
use serde::{Deserialize, Serialize};

/// A range representing a comment in the source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRange {
    /// Start position (byte offset)
    pub pos: u32,
    /// End position (byte offset)
    pub end: u32,
    /// Whether this is a `/* */` comment
    pub is_multi_line: bool,
}

impl CommentRange {
    pub fn new(pos: u32, end: u32, is_multi_line: bool) -> Self {
        CommentRange {
            pos,
            end,
            is_multi_line,
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }

    /// Get the comment text from source, delimiters included.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        self.span().slice(source)
    }

    /// Comment content without delimiters, one entry per line.
    ///
    /// Block comment lines lose their leading `*` decoration and surrounding
    /// blank lines are dropped.
    pub fn body_lines(&self, source: &str) -> Vec<String> {
        let text = self.get_text(source);
        if !self.is_multi_line {
            return vec![text.trim_start_matches('/').trim().to_string()];
        }

        let inner = text
            .strip_prefix("/*")
            .unwrap_or(text)
            .trim_start_matches('*');
        let inner = inner.strip_suffix("*/").unwrap_or(inner);
        let mut lines: Vec<String> = inner
            .lines()
            .map(|line| {
                let trimmed = line.trim_start();
                trimmed
                    .strip_prefix('*')
                    .unwrap_or(trimmed)
                    .trim()
                    .to_string()
            })
            .collect();

        while lines.first().is_some_and(String::is_empty) {
            lines.remove(0);
        }
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines
    }
}

/// Extract all comment ranges from source text.
///
/// String, template and regular-expression-free scanning: quoted literals are
/// skipped so that `"//"` inside a string is not taken for a comment.
pub fn get_comment_ranges(source: &str) -> Vec<CommentRange> {
    let mut comments = Vec::new();
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut pos = 0;

    while pos < len {
        let ch = bytes[pos];

        if ch == b'"' || ch == b'\'' || ch == b'`' {
            pos = skip_quoted(bytes, pos);
            continue;
        }

        if ch == b'/' && pos + 1 < len {
            let next = bytes[pos + 1];

            if next == b'/' {
                let start = pos as u32;
                pos += 2;
                while pos < len && bytes[pos] != b'\n' && bytes[pos] != b'\r' {
                    pos += 1;
                }
                comments.push(CommentRange::new(start, pos as u32, false));
                continue;
            } else if next == b'*' {
                let start = pos as u32;
                pos += 2;

                let mut closed = false;
                while pos + 1 < len {
                    if bytes[pos] == b'*' && bytes[pos + 1] == b'/' {
                        pos += 2;
                        closed = true;
                        break;
                    }
                    pos += 1;
                }
                if !closed {
                    pos = len;
                }

                comments.push(CommentRange::new(start, pos as u32, true));
                continue;
            }
        }

        pos += 1;
    }

    comments
}

/// Returns the offset just past the literal opened at `start`.
fn skip_quoted(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut pos = start + 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\\' => pos += 2,
            b'\n' | b'\r' if quote != b'`' => return pos,
            c if c == quote => return pos + 1,
            _ => pos += 1,
        }
    }
    bytes.len()
}

#[cfg(test)]
#[path = "../tests/comments.rs"]
mod tests;
