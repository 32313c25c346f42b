//! Syntax kinds of the consumed TypeScript tree.
//!
//! The set mirrors the subset of TypeScript's `SyntaxKind` that the
//! transformation core distinguishes. Kinds that only ever appear as tokens
//! (punctuation, trivia, modifier keywords) are classified so the router can
//! skip them without a per-kind handler.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,

    // Trivia
    SingleLineCommentTrivia,
    MultiLineCommentTrivia,
    NewLineTrivia,
    WhitespaceTrivia,

    // Literals
    NumericLiteral,
    BigIntLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    SemicolonToken,
    CommaToken,
    ColonToken,
    QuestionToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    ExclamationToken,
    AmpersandAmpersandToken,
    BarBarToken,
    BarToken,
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    SlashEqualsToken,

    // Identifiers
    Identifier,

    // Keywords
    ClassKeyword,
    ConstKeyword,
    ExtendsKeyword,
    FalseKeyword,
    ImplementsKeyword,
    InterfaceKeyword,
    LetKeyword,
    NullKeyword,
    SuperKeyword,
    ThisKeyword,
    TrueKeyword,
    VarKeyword,
    DebuggerKeyword,

    // Modifier keywords
    AbstractKeyword,
    DeclareKeyword,
    ExportKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReadonlyKeyword,
    StaticKeyword,

    // Type keywords
    AnyKeyword,
    BooleanKeyword,
    NeverKeyword,
    NumberKeyword,
    ObjectKeyword,
    StringKeyword,
    UndefinedKeyword,
    UnknownKeyword,
    VoidKeyword,

    // Names and signatures
    Parameter,
    PropertySignature,
    PropertyDeclaration,
    MethodSignature,
    MethodDeclaration,
    Constructor,
    IndexSignature,

    // Types
    TypeReference,
    TypeLiteral,
    ArrayType,
    UnionType,
    ParenthesizedType,
    ExpressionWithTypeArguments,

    // Expressions
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    ParenthesizedExpression,
    PrefixUnaryExpression,
    PostfixUnaryExpression,
    BinaryExpression,
    ClassExpression,

    // Statements
    Block,
    EmptyStatement,
    VariableStatement,
    ExpressionStatement,
    IfStatement,
    ForStatement,
    ReturnStatement,
    DebuggerStatement,

    // Declarations
    VariableDeclaration,
    VariableDeclarationList,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    HeritageClause,

    // Structure
    SourceFile,
    SyntaxList,
}

impl SyntaxKind {
    /// Tokens and trivia that never carry translatable content.
    pub fn is_punctuation_or_trivia(self) -> bool {
        matches!(
            self,
            SyntaxKind::EndOfFileToken
                | SyntaxKind::SingleLineCommentTrivia
                | SyntaxKind::MultiLineCommentTrivia
                | SyntaxKind::NewLineTrivia
                | SyntaxKind::WhitespaceTrivia
                | SyntaxKind::OpenBraceToken
                | SyntaxKind::CloseBraceToken
                | SyntaxKind::OpenParenToken
                | SyntaxKind::CloseParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::DotToken
                | SyntaxKind::SemicolonToken
                | SyntaxKind::CommaToken
                | SyntaxKind::ColonToken
                | SyntaxKind::QuestionToken
        )
    }

    /// Keywords that only ever act as declaration modifiers.
    pub fn is_modifier_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    /// Binary and unary operator tokens.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::LessThanToken
                | SyntaxKind::GreaterThanToken
                | SyntaxKind::LessThanEqualsToken
                | SyntaxKind::GreaterThanEqualsToken
                | SyntaxKind::EqualsEqualsToken
                | SyntaxKind::ExclamationEqualsToken
                | SyntaxKind::EqualsEqualsEqualsToken
                | SyntaxKind::ExclamationEqualsEqualsToken
                | SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::AsteriskToken
                | SyntaxKind::SlashToken
                | SyntaxKind::PercentToken
                | SyntaxKind::PlusPlusToken
                | SyntaxKind::MinusMinusToken
                | SyntaxKind::ExclamationToken
                | SyntaxKind::AmpersandAmpersandToken
                | SyntaxKind::BarBarToken
                | SyntaxKind::BarToken
                | SyntaxKind::EqualsToken
                | SyntaxKind::PlusEqualsToken
                | SyntaxKind::MinusEqualsToken
                | SyntaxKind::AsteriskEqualsToken
                | SyntaxKind::SlashEqualsToken
        )
    }

    /// Operators that write to their left operand.
    pub fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::EqualsToken
                | SyntaxKind::PlusEqualsToken
                | SyntaxKind::MinusEqualsToken
                | SyntaxKind::AsteriskEqualsToken
                | SyntaxKind::SlashEqualsToken
        )
    }

    /// Matches TypeScript's `isTypeNode`.
    pub fn is_type_node(self) -> bool {
        matches!(
            self,
            SyntaxKind::AnyKeyword
                | SyntaxKind::BooleanKeyword
                | SyntaxKind::NeverKeyword
                | SyntaxKind::NumberKeyword
                | SyntaxKind::ObjectKeyword
                | SyntaxKind::StringKeyword
                | SyntaxKind::UndefinedKeyword
                | SyntaxKind::UnknownKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::NullKeyword
                | SyntaxKind::TypeReference
                | SyntaxKind::TypeLiteral
                | SyntaxKind::ArrayType
                | SyntaxKind::UnionType
                | SyntaxKind::ParenthesizedType
                | SyntaxKind::ExpressionWithTypeArguments
        )
    }

    /// Fixed source text of token and keyword kinds.
    pub fn token_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::DotToken => ".",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::QuestionToken => "?",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::LessThanEqualsToken => "<=",
            SyntaxKind::GreaterThanEqualsToken => ">=",
            SyntaxKind::EqualsEqualsToken => "==",
            SyntaxKind::ExclamationEqualsToken => "!=",
            SyntaxKind::EqualsEqualsEqualsToken => "===",
            SyntaxKind::ExclamationEqualsEqualsToken => "!==",
            SyntaxKind::PlusToken => "+",
            SyntaxKind::MinusToken => "-",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::SlashToken => "/",
            SyntaxKind::PercentToken => "%",
            SyntaxKind::PlusPlusToken => "++",
            SyntaxKind::MinusMinusToken => "--",
            SyntaxKind::ExclamationToken => "!",
            SyntaxKind::AmpersandAmpersandToken => "&&",
            SyntaxKind::BarBarToken => "||",
            SyntaxKind::BarToken => "|",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::PlusEqualsToken => "+=",
            SyntaxKind::MinusEqualsToken => "-=",
            SyntaxKind::AsteriskEqualsToken => "*=",
            SyntaxKind::SlashEqualsToken => "/=",
            SyntaxKind::ClassKeyword => "class",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::ExtendsKeyword => "extends",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::ImplementsKeyword => "implements",
            SyntaxKind::InterfaceKeyword => "interface",
            SyntaxKind::LetKeyword => "let",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::SuperKeyword => "super",
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::VarKeyword => "var",
            SyntaxKind::DebuggerKeyword => "debugger",
            SyntaxKind::AbstractKeyword => "abstract",
            SyntaxKind::DeclareKeyword => "declare",
            SyntaxKind::ExportKeyword => "export",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::ProtectedKeyword => "protected",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::ReadonlyKeyword => "readonly",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::AnyKeyword => "any",
            SyntaxKind::BooleanKeyword => "boolean",
            SyntaxKind::NeverKeyword => "never",
            SyntaxKind::NumberKeyword => "number",
            SyntaxKind::ObjectKeyword => "object",
            SyntaxKind::StringKeyword => "string",
            SyntaxKind::UndefinedKeyword => "undefined",
            SyntaxKind::UnknownKeyword => "unknown",
            SyntaxKind::VoidKeyword => "void",
            _ => return None,
        };
        Some(text)
    }
}

#[cfg(test)]
#[path = "../tests/kind.rs"]
mod tests;
