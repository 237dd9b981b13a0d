//! Token cursor for the expression parser.
//!
//! The parser sees only significant tokens (trivia is dropped while
//! lexing), each with two spans: the raw-buffer span used for tree nodes
//! and diagnostics, and the span in the assembled body used to read the
//! token's text. The stream always ends with one zero-width `Eof`.

use yel_ir::{Span, Token, TokenKind};
use yel_lexer::{AssembledBody, ExprLexer};

use crate::recovery::TokenSet;

/// Lexed tokens of one expression body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenStream {
    /// Raw-coordinate tokens, ending with `Eof`.
    tokens: Vec<Token>,
    /// Body-coordinate spans, parallel to `tokens`.
    text_spans: Vec<Span>,
    /// First token dropped by a token budget, with its body span.
    truncated_at: Option<(Token, Span)>,
}

impl TokenStream {
    /// Lex `body`, keeping at most `max_tokens` significant tokens.
    pub fn lex(body: &AssembledBody, max_tokens: Option<usize>) -> Self {
        let limit = max_tokens.unwrap_or(usize::MAX);
        let mut tokens = Vec::new();
        let mut text_spans = Vec::new();
        let mut truncated_at = None;

        for tok in ExprLexer::new(&body.text).filter(|t| !t.kind.is_trivia()) {
            let raw = Token::new(tok.kind, body.map.map_span(tok.span));
            if tokens.len() == limit {
                truncated_at = Some((raw, tok.span));
                break;
            }
            tokens.push(raw);
            text_spans.push(tok.span);
        }

        let end = u32::try_from(body.text.len()).unwrap_or(u32::MAX);
        let (eof, eof_text) = match truncated_at {
            Some((raw, text)) => (raw.span.start, text.start),
            None => (body.map.to_raw(end), end),
        };
        tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));
        text_spans.push(Span::point(eof_text));

        TokenStream {
            tokens,
            text_spans,
            truncated_at,
        }
    }

    /// Significant tokens, excluding the final `Eof`.
    pub fn len(&self) -> usize {
        self.tokens.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The first token a budget cut off, with its body-coordinate span.
    pub fn truncated_at(&self) -> Option<(Token, Span)> {
        self.truncated_at
    }
}

/// Position in a [`TokenStream`].
pub struct Cursor<'a> {
    tokens: &'a [Token],
    text_spans: &'a [Span],
    /// The assembled body the text spans point into.
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(stream: &'a TokenStream, text: &'a str) -> Self {
        Cursor {
            tokens: &stream.tokens,
            text_spans: &stream.text_spans,
            text,
            pos: 0,
        }
    }

    /// Used for progress tracking and snapshots.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back to a position taken from [`position`](Self::position).
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(pos < self.tokens.len(), "cursor position {pos} out of bounds");
        self.pos = pos.min(self.tokens.len() - 1);
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    /// Span of the last consumed token, or a point at the start.
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens[prev].span,
            None => Span::point(self.current_span().start),
        }
    }

    /// Source text of the current token, as the lexer saw it.
    pub fn current_text(&self) -> &'a str {
        self.text_spans[self.pos].slice(self.text)
    }

    /// How the current token reads in an "expected ..., got '...'" message.
    pub fn found_text(&self) -> &'a str {
        match self.current_kind() {
            TokenKind::Eof => TokenKind::Eof.display_name(),
            _ => self.current_text(),
        }
    }

    /// Kind `n` tokens ahead; `Eof` past the end.
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn check_any(&self, set: TokenSet) -> bool {
        set.contains(self.current_kind())
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume the current token. `Eof` is never consumed.
    pub fn advance(&mut self) -> Token {
        let tok = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        tok
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests;
