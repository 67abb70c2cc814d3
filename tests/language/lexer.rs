//! Integration tests for the Lexer

use pingboard_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Literals
// =============================================================================

#[test]
fn lex_names() {
    assert_eq!(
        kinds("squareBumper _a1"),
        vec![
            TokenKind::Name("squareBumper".into()),
            TokenKind::Name("_a1".into()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn lex_numbers_keep_text() {
    assert_eq!(
        kinds("12 -3 2.50 7. -0.5"),
        vec![
            TokenKind::Int("12".into()),
            TokenKind::Int("-3".into()),
            TokenKind::Float("2.50".into()),
            TokenKind::Float("7.".into()),
            TokenKind::Float("-0.5".into()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn lex_fraction_only_floats() {
    assert_eq!(
        kinds("x=.75"),
        vec![
            TokenKind::Name("x".into()),
            TokenKind::Equals,
            TokenKind::Float(".75".into()),
            TokenKind::Eof
        ]
    );
}

#[test]
fn lex_field() {
    assert_eq!(
        kinds("x=19"),
        vec![
            TokenKind::Name("x".into()),
            TokenKind::Equals,
            TokenKind::Int("19".into()),
            TokenKind::Eof
        ]
    );
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn lex_newlines_and_comments() {
    let tokens = kinds("board # the header\n\r\nball");
    assert_eq!(tokens[0], TokenKind::Name("board".into()));
    assert_eq!(tokens[1], TokenKind::Comment("# the header".into()));
    assert_eq!(tokens[2], TokenKind::Newline);
    assert_eq!(tokens[3], TokenKind::Newline);
    assert_eq!(tokens[4], TokenKind::Name("ball".into()));
}

#[test]
fn lex_spans_track_lines() {
    let tokens = Lexer::tokenize_all("board\n  fire");
    let fire = tokens
        .iter()
        .find(|t| t.kind == TokenKind::Name("fire".into()))
        .unwrap();
    assert_eq!(fire.span.line, 2);
    assert_eq!(fire.span.column, 3);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn lex_bare_minus_is_error() {
    assert!(matches!(kinds("x=-")[2], TokenKind::Error(_)));
}

#[test]
fn lex_unexpected_character() {
    assert!(matches!(kinds("ball@")[1], TokenKind::Error(_)));
}
