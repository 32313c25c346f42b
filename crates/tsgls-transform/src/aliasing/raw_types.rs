//! Friendly names from raw type annotation text.
//!
//! Handles the shapes a declared type annotation takes when nothing richer is
//! known about it: `T[]`, `Array<T>`, `Map<K, V>`, `{ [key: K]: V }`, unions,
//! parenthesized types and other generic references.

use super::TypeName;
use tsgls_common::limits::MAX_RAW_TYPE_NESTING;
use tsgls_ir::IrCommand;
use tsgls_ir::command_names::{DICTIONARY_TYPE, GENERIC_TYPE, LIST_TYPE, UNION_TYPE};

/// Parse raw annotation text into a type name, or `None` when it has no
/// representable form.
pub fn parse_raw_type(text: &str) -> Option<TypeName> {
    let mut parser = RawTypeParser {
        tokens: tokenize(text)?,
        pos: 0,
        nesting: 0,
    };
    let parsed = parser.union()?;
    if parser.pos != parser.tokens.len() {
        return None;
    }
    parsed.into_type_name()
}

/// Friendly name of a primitive keyword or plain type name.
pub fn alias_type_keyword(name: &str) -> TypeName {
    match name {
        "number" => TypeName::text("float"),
        other => TypeName::text(other),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Name(String),
    Punct(char),
}

fn tokenize(text: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else if ch.is_alphanumeric() || matches!(ch, '_' | '$' | '.') {
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.')) {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }
            tokens.push(Token::Name(text[start..end].to_string()));
        } else if matches!(ch, '<' | '>' | '[' | ']' | '(' | ')' | '{' | '}' | '|' | ',' | ':' | ';') {
            tokens.push(Token::Punct(ch));
            chars.next();
        } else {
            return None;
        }
    }
    Some(tokens)
}

/// Intermediate parse result. Nullish members are tracked separately so a
/// union can drop them.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Parsed {
    Nullish,
    Type(TypeName),
}

impl Parsed {
    fn into_type_name(self) -> Option<TypeName> {
        match self {
            Parsed::Nullish => None,
            Parsed::Type(name) => Some(name),
        }
    }
}

struct RawTypeParser {
    tokens: Vec<Token>,
    pos: usize,
    nesting: usize,
}

impl RawTypeParser {
    fn peek_punct(&self, punct: char) -> bool {
        self.tokens.get(self.pos) == Some(&Token::Punct(punct))
    }

    fn eat(&mut self, punct: char) -> Option<()> {
        if self.peek_punct(punct) {
            self.pos += 1;
            Some(())
        } else {
            None
        }
    }

    fn name(&mut self) -> Option<String> {
        match self.tokens.get(self.pos) {
            Some(Token::Name(name)) => {
                self.pos += 1;
                Some(name.clone())
            }
            _ => None,
        }
    }

    fn union(&mut self) -> Option<Parsed> {
        self.nesting += 1;
        if self.nesting > MAX_RAW_TYPE_NESTING {
            return None;
        }
        // A leading `|` is legal TypeScript.
        let _ = self.eat('|');
        let mut members = vec![self.postfix()?];
        while self.eat('|').is_some() {
            members.push(self.postfix()?);
        }
        self.nesting -= 1;

        let mut kept: Vec<TypeName> = Vec::with_capacity(members.len());
        for member in members.into_iter().filter_map(Parsed::into_type_name) {
            if !kept.contains(&member) {
                kept.push(member);
            }
        }
        Some(match kept.len() {
            0 => Parsed::Nullish,
            1 => Parsed::Type(kept.remove(0)),
            _ => Parsed::Type(TypeName::Command(IrCommand::with_args(UNION_TYPE, kept))),
        })
    }

    fn postfix(&mut self) -> Option<Parsed> {
        let mut parsed = self.primary()?;
        while self.peek_punct('[') {
            self.pos += 1;
            self.eat(']')?;
            let element = parsed.into_type_name()?;
            parsed = Parsed::Type(TypeName::Command(IrCommand::new(LIST_TYPE).arg(element)));
        }
        Some(parsed)
    }

    fn primary(&mut self) -> Option<Parsed> {
        if self.eat('(').is_some() {
            let inner = self.union()?;
            self.eat(')')?;
            return Some(inner);
        }
        if self.eat('{').is_some() {
            return self.index_signature_literal();
        }

        let name = self.name()?;
        if matches!(name.as_str(), "null" | "undefined") {
            return Some(Parsed::Nullish);
        }
        if self.eat('<').is_none() {
            return Some(Parsed::Type(alias_type_keyword(&name)));
        }

        let mut args = vec![self.union()?.into_type_name()?];
        while self.eat(',').is_some() {
            args.push(self.union()?.into_type_name()?);
        }
        self.eat('>')?;

        let command = match (name.as_str(), args.len()) {
            ("Array", 1) => IrCommand::with_args(LIST_TYPE, args),
            ("Map", 2) => IrCommand::with_args(DICTIONARY_TYPE, args),
            _ => IrCommand::new(GENERIC_TYPE).arg(name).extend_args(args),
        };
        Some(Parsed::Type(TypeName::Command(command)))
    }

    /// `{ [key: K]: V }` after the opening brace.
    fn index_signature_literal(&mut self) -> Option<Parsed> {
        self.eat('[')?;
        self.name()?;
        self.eat(':')?;
        let key = self.union()?.into_type_name()?;
        self.eat(']')?;
        self.eat(':')?;
        let value = self.union()?.into_type_name()?;
        let _ = self.eat(';').or_else(|| self.eat(','));
        self.eat('}')?;
        Some(Parsed::Type(TypeName::Command(
            IrCommand::new(DICTIONARY_TYPE).arg(key).arg(value),
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/raw_types.rs"]
mod tests;
