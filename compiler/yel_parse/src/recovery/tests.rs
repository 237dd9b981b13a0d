use pretty_assertions::assert_eq;
use yel_lexer::{AssembledBody, BodyMap};

use super::*;
use crate::cursor::TokenStream;

fn stream(text: &str) -> TokenStream {
    TokenStream::lex(
        &AssembledBody {
            text: text.to_owned(),
            map: BodyMap::Shifted { base: 0 },
        },
        None,
    )
}

#[test]
fn membership() {
    let set = TokenSet::new().with(TokenKind::Comma).with(TokenKind::RParen);
    assert!(set.contains(TokenKind::Comma));
    assert!(!set.contains(TokenKind::RBracket));
    assert_eq!(set.count(), 2);
    assert!(TokenSet::new().is_empty());
}

#[test]
fn highest_index_fits() {
    let set = TokenSet::single(TokenKind::Eof);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![TokenKind::Eof]);
}

#[test]
fn expected_formatting() {
    assert_eq!(TokenSet::new().format_expected(), "nothing");
    assert_eq!(TokenSet::single(TokenKind::RParen).format_expected(), "`)`");
    assert_eq!(
        TokenSet::new()
            .with(TokenKind::Comma)
            .with(TokenKind::RParen)
            .format_expected(),
        "`,` or `)`"
    );
    assert_eq!(
        TokenSet::new()
            .with(TokenKind::Colon)
            .with(TokenKind::Comma)
            .with(TokenKind::RBrace)
            .format_expected(),
        "`:`, `,`, or `}`"
    );
    assert_eq!(EXPR_END.format_expected(), "`;` or end of expression");
}

#[test]
fn expression_starts() {
    assert!(EXPR_FIRST.contains(TokenKind::Empty));
    assert!(EXPR_FIRST.contains(TokenKind::LBrace));
    assert!(!EXPR_FIRST.contains(TokenKind::Colon));
    assert!(!PRIMARY_START.contains(TokenKind::Minus));
}

#[test]
fn synchronize_skips_nested_groups() {
    let text = "b(c, d), e)";
    let s = stream(text);
    let mut cursor = Cursor::new(&s, text);
    let stop = TokenSet::new().with(TokenKind::Comma).with(TokenKind::RParen);
    assert!(synchronize(&mut cursor, stop));
    assert_eq!(cursor.current_kind(), TokenKind::Comma);
    assert_eq!(cursor.current_span().start, 7);
}

#[test]
fn synchronize_stops_at_unmatched_closer() {
    let text = "x ] y";
    let s = stream(text);
    let mut cursor = Cursor::new(&s, text);
    assert!(!synchronize(&mut cursor, TokenSet::single(TokenKind::Comma)));
    assert_eq!(cursor.current_kind(), TokenKind::RBracket);
}

#[test]
fn synchronize_to_end() {
    let text = "x y";
    let s = stream(text);
    let mut cursor = Cursor::new(&s, text);
    assert!(synchronize(&mut cursor, EXPR_END));
    assert!(cursor.is_at_end());
}

fn colon_ahead(text: &str) -> bool {
    let s = stream(text);
    separator_colon_ahead(&Cursor::new(&s, text))
}

#[test]
fn separator_colon_found_at_depth_zero() {
    assert!(colon_ahead(": y"));
    assert!(colon_ahead(".a + 1 : y"));
    assert!(colon_ahead("(a : b) : y"));
    assert!(colon_ahead("? a : b : y"));
}

#[test]
fn separator_colon_missing() {
    assert!(!colon_ahead(""));
    assert!(!colon_ahead("? a : b"));
    assert!(!colon_ahead(", b: 2"));
    assert!(!colon_ahead("} : y"));
    assert!(!colon_ahead("; x : y"));
}

#[test]
fn call_prefix_colon_is_not_a_separator() {
    assert!(!colon_ahead("+ ns:g(2)"));
    assert!(colon_ahead("+ ns:g(2) : y"));
}
