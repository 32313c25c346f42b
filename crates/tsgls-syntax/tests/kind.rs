use super::*;

#[test]
fn test_modifier_keywords_are_not_punctuation() {
    assert!(SyntaxKind::PrivateKeyword.is_modifier_keyword());
    assert!(!SyntaxKind::PrivateKeyword.is_punctuation_or_trivia());
    assert!(SyntaxKind::SemicolonToken.is_punctuation_or_trivia());
    assert!(!SyntaxKind::Identifier.is_modifier_keyword());
}

#[test]
fn test_assignment_operators_are_operators() {
    for kind in [
        SyntaxKind::EqualsToken,
        SyntaxKind::PlusEqualsToken,
        SyntaxKind::MinusEqualsToken,
        SyntaxKind::AsteriskEqualsToken,
        SyntaxKind::SlashEqualsToken,
    ] {
        assert!(kind.is_assignment_operator(), "{kind:?}");
        assert!(kind.is_operator(), "{kind:?}");
    }
    assert!(!SyntaxKind::EqualsEqualsEqualsToken.is_assignment_operator());
}

#[test]
fn test_type_nodes() {
    assert!(SyntaxKind::TypeReference.is_type_node());
    assert!(SyntaxKind::NumberKeyword.is_type_node());
    assert!(!SyntaxKind::NumericLiteral.is_type_node());
    assert!(!SyntaxKind::Identifier.is_type_node());
}

#[test]
fn test_token_text() {
    assert_eq!(SyntaxKind::EqualsEqualsEqualsToken.token_text(), Some("==="));
    assert_eq!(SyntaxKind::ThisKeyword.token_text(), Some("this"));
    assert_eq!(SyntaxKind::ClassDeclaration.token_text(), None);
}
