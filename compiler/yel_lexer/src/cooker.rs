//! Token cooking: raw `(RawTag, len)` pairs to expression [`Token`]s.
//!
//! ```text
//! text → RawScanner → (RawTag, len) → cook → Token { kind, span }
//! ```
//!
//! Operators and delimiters map 1:1. Identifiers go through keyword lookup
//! after maximal munch. Literal values are not parsed here; the parser
//! cooks them from the token text when it builds literal nodes.

use yel_ir::{Span, Token, TokenKind};
use yel_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::keywords;

/// Map one raw token to its [`TokenKind`]. `text` is the token's source.
pub(crate) fn cook(tag: RawTag, text: &str) -> TokenKind {
    match tag {
        RawTag::Ident => keywords::lookup(text).unwrap_or(TokenKind::Ident),
        RawTag::Int => TokenKind::Int,
        RawTag::Float => TokenKind::Float,
        RawTag::String => TokenKind::String,
        RawTag::UnterminatedString => TokenKind::UnterminatedString,

        RawTag::Plus => TokenKind::Plus,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Star => TokenKind::Star,
        RawTag::Slash => TokenKind::Slash,
        RawTag::Percent => TokenKind::Percent,
        RawTag::Bang => TokenKind::Bang,
        RawTag::Less => TokenKind::Less,
        RawTag::Greater => TokenKind::Greater,
        RawTag::Equal => TokenKind::Assign,
        RawTag::Question => TokenKind::Question,
        RawTag::Colon => TokenKind::Colon,
        RawTag::Dot => TokenKind::Dot,

        RawTag::EqualEqual => TokenKind::EqEq,
        RawTag::NotEqual => TokenKind::BangEq,
        RawTag::LessEqual => TokenKind::LtEq,
        RawTag::GreaterEqual => TokenKind::GtEq,
        RawTag::AmpersandAmpersand => TokenKind::AmpAmp,
        RawTag::PipePipe => TokenKind::PipePipe,
        RawTag::PlusEqual => TokenKind::PlusEq,
        RawTag::Arrow => TokenKind::Arrow,

        RawTag::LeftParen => TokenKind::LParen,
        RawTag::RightParen => TokenKind::RParen,
        RawTag::LeftBracket => TokenKind::LBracket,
        RawTag::RightBracket => TokenKind::RBracket,
        RawTag::LeftBrace => TokenKind::LBrace,
        RawTag::RightBrace => TokenKind::RBrace,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Semicolon => TokenKind::Semicolon,

        RawTag::Whitespace => TokenKind::Trivia,
        RawTag::InvalidByte => TokenKind::BadChar,
        RawTag::Eof => TokenKind::Eof,
    }
}

/// Lazy expression token stream over one text.
///
/// Restartable only from the beginning; spans are offsets into the text
/// it was built from. Trivia tokens are included so the stream covers
/// every byte.
pub struct ExprLexer {
    buf: SourceBuffer,
    pos: u32,
    done: bool,
}

impl ExprLexer {
    pub fn new(text: &str) -> Self {
        ExprLexer {
            buf: SourceBuffer::new(text),
            pos: 0,
            done: false,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let mut scanner = RawScanner::new(self.buf.cursor_at(self.pos));
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            self.done = true;
            return None;
        }
        let start = self.pos;
        let end = start + raw.len;
        self.pos = end;
        let text = self.buf.cursor().slice(start, end);
        Some(Token::new(cook(raw.tag, text), Span::new(start, end)))
    }
}

impl Iterator for ExprLexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenize a whole expression text, trivia included.
pub fn tokenize(text: &str) -> Vec<Token> {
    ExprLexer::new(text).collect()
}
