use pretty_assertions::assert_eq;
use yel_lexer::BodyMap;

use super::*;

fn body(text: &str, base: u32) -> AssembledBody {
    AssembledBody {
        text: text.to_owned(),
        map: BodyMap::Shifted { base },
    }
}

#[test]
fn trivia_is_dropped_and_eof_appended() {
    let stream = TokenStream::lex(&body("a + b", 0), None);
    let kinds: Vec<TokenKind> = stream.tokens().iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::Plus, TokenKind::Ident, TokenKind::Eof]
    );
    assert_eq!(stream.len(), 3);
    assert_eq!(stream.tokens()[3].span, Span::point(5));
}

#[test]
fn spans_are_raw_and_text_is_body() {
    let text = "foo.bar";
    let stream = TokenStream::lex(&body(text, 10), None);
    let mut cursor = Cursor::new(&stream, text);
    assert_eq!(cursor.current_span(), Span::new(10, 13));
    assert_eq!(cursor.current_text(), "foo");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current_text(), "bar");
    assert_eq!(cursor.previous_span(), Span::new(13, 14));
}

#[test]
fn eof_is_sticky() {
    let stream = TokenStream::lex(&body("x", 0), None);
    let mut cursor = Cursor::new(&stream, "x");
    assert!(cursor.eat(TokenKind::Ident));
    assert!(cursor.is_at_end());
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.found_text(), "end of expression");
    assert_eq!(cursor.peek_kind_at(5), TokenKind::Eof);
}

#[test]
fn budget_truncates_stream() {
    let stream = TokenStream::lex(&body("a b c d", 0), Some(2));
    assert_eq!(stream.len(), 2);
    let (cut, text_span) = stream.truncated_at().map_or((None, Span::DUMMY), |(t, s)| (Some(t), s));
    assert_eq!(cut.map(|t| t.span), Some(Span::new(4, 5)));
    assert_eq!(text_span, Span::new(4, 5));
    assert_eq!(stream.tokens()[2].span, Span::point(4));
}

#[test]
fn positions_roll_back() {
    let stream = TokenStream::lex(&body("a:b(", 0), None);
    let mut cursor = Cursor::new(&stream, "a:b(");
    let start = cursor.position();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Ident);
    cursor.set_position(start);
    assert_eq!(cursor.current_text(), "a");
}
