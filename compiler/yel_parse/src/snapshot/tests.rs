use pretty_assertions::assert_eq;
use yel_ir::{ExprKind, Span, TokenKind};
use yel_lexer::{AssembledBody, BodyMap};

use crate::context::ParseContext;
use crate::{Parser, TokenStream};

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
fn snapshot_is_small() {
    assert!(std::mem::size_of::<super::ParserSnapshot>() <= 32);
}

#[test]
fn restore_discards_everything_after_the_snapshot() {
    let s = stream("a + b");
    let mut p = Parser::new(&s, "a + b");
    let before = p.snapshot();

    p.cursor.advance();
    p.alloc(ExprKind::Error, Span::new(0, 1));
    p.expected(crate::TokenSet::single(TokenKind::Comma));
    p.context = ParseContext::COLON_IS_SEPARATOR;

    p.restore(before);
    assert_eq!(p.cursor.position(), 0);
    assert!(p.arena.is_empty());
    assert!(p.diagnostics.is_empty());
    assert_eq!(p.context, ParseContext::NONE);
}

#[test]
fn try_parse_keeps_success_and_rolls_back_failure() {
    let s = stream("x : y");
    let mut p = Parser::new(&s, "x : y");

    let failed: Option<()> = p.try_parse(|p| {
        p.cursor.advance();
        p.cursor.eat(TokenKind::Comma).then_some(())
    });
    assert_eq!(failed, None);
    assert_eq!(p.cursor.position(), 0);

    let kept = p.try_parse(|p| {
        p.cursor.advance();
        p.cursor.eat(TokenKind::Colon).then_some(())
    });
    assert_eq!(kept, Some(()));
    assert_eq!(p.cursor.current_kind(), TokenKind::Ident);
    assert_eq!(p.cursor.current_text(), "y");
}
