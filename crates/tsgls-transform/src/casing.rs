//! Identifier word splitting and case conversion.
//!
//! GLS leaves final casing to each target language's renderer; the core only
//! needs names as ordered lowercase word parts.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub type NameParts = SmallVec<[String; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// `fooBar`
    CamelCase,
    /// `FooBar`
    PascalCase,
    /// `foo_bar`
    SnakeCase,
    /// `FOO_BAR`
    UpperSnakeCase,
    /// `foo-bar`
    KebabCase,
    /// `foo bar`
    SpaceLowerCase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Separator,
}

fn classify(ch: char) -> CharClass {
    if ch.is_uppercase() {
        CharClass::Upper
    } else if ch.is_lowercase() {
        CharClass::Lower
    } else if ch.is_ascii_digit() {
        CharClass::Digit
    } else if ch.is_alphanumeric() {
        CharClass::Lower
    } else {
        CharClass::Separator
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NameSplitter;

impl NameSplitter {
    pub fn new() -> NameSplitter {
        NameSplitter
    }

    /// Split a name into lowercase words.
    ///
    /// Word boundaries are separators (`_`, `-`, `$`, whitespace), a lower to
    /// upper transition (`fooBar`), the last capital of an acronym run
    /// (`XMLHttp` splits as `xml`, `http`) and letter/digit transitions.
    pub fn split(&self, name: &str) -> NameParts {
        let chars: Vec<char> = name.chars().collect();
        let mut parts = NameParts::new();
        let mut current = String::new();

        for (i, &ch) in chars.iter().enumerate() {
            let class = classify(ch);
            if class == CharClass::Separator {
                flush(&mut current, &mut parts);
                continue;
            }
            if let Some(&prev) = i.checked_sub(1).and_then(|p| chars.get(p)) {
                let prev_class = classify(prev);
                let next_class = chars.get(i + 1).copied().map(classify);
                let boundary = match (prev_class, class) {
                    (CharClass::Lower, CharClass::Upper) => true,
                    (CharClass::Upper, CharClass::Upper) => next_class == Some(CharClass::Lower),
                    (CharClass::Digit, CharClass::Lower | CharClass::Upper) => true,
                    (CharClass::Lower | CharClass::Upper, CharClass::Digit) => true,
                    _ => false,
                };
                if boundary {
                    flush(&mut current, &mut parts);
                }
            }
            current.extend(ch.to_lowercase());
        }
        flush(&mut current, &mut parts);
        parts
    }

    /// Re-join a name's words in the given style.
    pub fn convert(&self, name: &str, style: CaseStyle) -> String {
        join(&self.split(name), style)
    }

    /// Lowercase, space-separated words; used for human-readable reasons.
    pub fn words(&self, name: &str) -> String {
        self.convert(name, CaseStyle::SpaceLowerCase)
    }
}

fn flush(current: &mut String, parts: &mut NameParts) {
    if !current.is_empty() {
        parts.push(std::mem::take(current));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join lowercase words in a case style.
pub fn join(parts: &[String], style: CaseStyle) -> String {
    match style {
        CaseStyle::CamelCase => parts
            .iter()
            .enumerate()
            .map(|(i, part)| if i == 0 { part.clone() } else { capitalize(part) })
            .collect(),
        CaseStyle::PascalCase => parts.iter().map(|part| capitalize(part)).collect(),
        CaseStyle::SnakeCase => parts.join("_"),
        CaseStyle::UpperSnakeCase => parts.join("_").to_uppercase(),
        CaseStyle::KebabCase => parts.join("-"),
        CaseStyle::SpaceLowerCase => parts.join(" "),
    }
}

#[cfg(test)]
#[path = "../tests/casing.rs"]
mod tests;
