//! Unit tests for the lexer module.

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lang".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_integer() {
    assert_eq!(kinds("42"), vec![TokenKind::Integer, TokenKind::EOF]);
}

#[test]
fn test_tokenize_float() {
    assert_eq!(kinds("3.14"), vec![TokenKind::Float, TokenKind::EOF]);
}

#[test]
fn test_literal_text_is_preserved() {
    let tokens = tokenize("42 3.14".to_string(), Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
}

#[test]
fn test_tokenize_string_literal() {
    let tokens = tokenize(r#""hello""#.to_string(), Some("test.lang".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
}

#[test]
fn test_string_escapes() {
    let tokens = tokenize(
        r#""line\nbreak\ttab\\slash""#.to_string(),
        Some("test.lang".to_string()),
    )
    .unwrap();

    assert_eq!(tokens[0].value, "line\nbreak\ttab\\slash");
}

#[test]
fn test_keywords_are_reserved() {
    assert_eq!(
        kinds("var val value"),
        vec![
            TokenKind::Var,
            TokenKind::Val,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_declaration() {
    assert_eq!(
        kinds("val x: Int = 5"),
        vec![
            TokenKind::Val,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_call() {
    assert_eq!(
        kinds("print(\"hi\", 42)"),
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::String,
            TokenKind::Comma,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("a + b - c * d / e < f > g"),
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Dash,
            TokenKind::Identifier,
            TokenKind::Star,
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Identifier,
            TokenKind::Greater,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_tokenize_dotted_name() {
    assert_eq!(
        kinds("Console.WriteLine"),
        vec![
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("1 // the rest of the line vanishes\n2"),
        vec![TokenKind::Integer, TokenKind::Integer, TokenKind::EOF]
    );
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        kinds("  1\n\t2  "),
        vec![TokenKind::Integer, TokenKind::Integer, TokenKind::EOF]
    );
}

#[test]
fn test_empty_source_yields_eof() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_character() {
    let result = tokenize("1 @ 2".to_string(), Some("test.lang".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnrecognisedToken");
}
