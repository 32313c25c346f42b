//! String literals.

use crate::router::{NodeVisitRouter, VisitResult};
use tsgls_ir::{Fragment, Transformation};
use tsgls_syntax::NodeIndex;

/// A literal line holding the string re-quoted with double quotes.
pub fn visit_string_literal(router: &mut NodeVisitRouter<'_>, node: NodeIndex) -> VisitResult {
    let text = wrap_with_quotes(router.arena().node_text(node));
    Ok(Some(Fragment::Transformation(Transformation::literal(
        router.span(node),
        text,
    ))))
}

fn strip_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) if open == close && matches!(open, '"' | '\'' | '`') => {
            &text[1..text.len() - 1]
        }
        _ => text,
    }
}

/// Re-quote a string literal's source text with double quotes, keeping the
/// decoded value identical.
///
/// Raw line breaks and tabs, which template literals may hold, are escaped so
/// the result stays on one line. An escaped line break is a continuation and
/// contributes nothing.
pub fn wrap_with_quotes(text: &str) -> String {
    let inner = strip_quotes(text);
    let mut out = String::with_capacity(inner.len() + 2);
    out.push('"');
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some('\r') => {
                    if chars.clone().next() == Some('\n') {
                        chars.next();
                    }
                }
                Some('\n' | '\u{2028}' | '\u{2029}') => {}
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push_str("\\\\"),
            },
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            // Templates read a raw CRLF or CR as LF.
            '\r' => {
                if chars.clone().next() == Some('\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
#[path = "../../tests/string_literal.rs"]
mod tests;
