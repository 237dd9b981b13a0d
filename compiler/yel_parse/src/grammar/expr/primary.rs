//! Primary expressions: literals, identifiers, qualified calls, groups,
//! list/map/set literals.

use smallvec::smallvec;
use tracing::trace;
use yel_diagnostic::{bad_character, invalid_number, unterminated_string};
use yel_ir::{ExprId, ExprKind, Literal, MapEntry, Span, TokenKind};
use yel_lexer::{parse_float, parse_int, unescape_string};

use crate::context::ParseContext;
use crate::outcome::ParseOutcome;
use crate::recovery::{separator_colon_ahead, synchronize, MAP_SEPARATORS, PRIMARY_START};
use crate::Parser;

impl Parser<'_> {
    /// One primary. `EmptyErr` when the current token cannot start one;
    /// nothing is reported in that case.
    pub(super) fn parse_primary(&mut self) -> ParseOutcome<ExprId> {
        let span = self.current_span();
        let text = self.cursor.current_text();

        let literal = match self.current_kind() {
            TokenKind::Int => match parse_int(text) {
                Some(value) => Literal::Int(value),
                None => return self.invalid_number(span, text),
            },
            TokenKind::Float => match parse_float(text) {
                Some(value) => Literal::float(value),
                None => return self.invalid_number(span, text),
            },
            TokenKind::String => Literal::String(unescape_string(text).into_owned()),
            TokenKind::UnterminatedString => {
                self.cursor.advance();
                self.report(unterminated_string(span));
                let value = Literal::String(unescape_string(text).into_owned());
                return ParseOutcome::consumed_err(self.alloc(ExprKind::Literal(value), span));
            }
            TokenKind::True => Literal::Bool(true),
            TokenKind::False => Literal::Bool(false),
            TokenKind::Null => Literal::Null,
            TokenKind::Ident => return self.parse_ident(),
            TokenKind::LParen => return self.parse_group(),
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::LBrace => return self.parse_brace(),
            TokenKind::BadChar => {
                self.cursor.advance();
                self.report(bad_character(span, text));
                return ParseOutcome::consumed_err(self.alloc(ExprKind::Error, span));
            }
            _ => return ParseOutcome::empty_err(PRIMARY_START),
        };

        self.cursor.advance();
        ParseOutcome::consumed_ok(self.alloc(ExprKind::Literal(literal), span))
    }

    #[cold]
    fn invalid_number(&mut self, span: Span, text: &str) -> ParseOutcome<ExprId> {
        self.cursor.advance();
        self.report(invalid_number(span, text));
        ParseOutcome::consumed_err(self.alloc(ExprKind::Error, span))
    }

    /// A plain identifier, unless it starts `ns:name(`.
    ///
    /// Where a `:` separator is pending, the qualified call is kept only if
    /// that separator still follows it: `c ? a : f(1)` is a ternary, while
    /// `c ? ns:f(1) : b` holds a call.
    fn parse_ident(&mut self) -> ParseOutcome<ExprId> {
        let call = if self.context.has(ParseContext::COLON_IS_SEPARATOR) {
            self.try_parse(|p| {
                p.parse_qualified_call()
                    .filter(|_| separator_colon_ahead(&p.cursor))
            })
        } else {
            self.parse_qualified_call()
        };
        if let Some(call) = call {
            return call;
        }
        let name = self.cursor.current_text().to_owned();
        let span = self.cursor.advance().span;
        ParseOutcome::consumed_ok(self.alloc(ExprKind::Ident(name), span))
    }

    /// `IDENT ':' IDENT argList+`, committed to only once the whole
    /// `IDENT ':' IDENT '('` prefix is present. `None` leaves the cursor
    /// where it was.
    fn parse_qualified_call(&mut self) -> Option<ParseOutcome<ExprId>> {
        let prefix = self.try_parse(|p| {
            let namespace = p.cursor.current_text();
            let start = p.cursor.advance().span;
            if !p.cursor.eat(TokenKind::Colon) || !p.check(TokenKind::Ident) {
                return None;
            }
            let name = p.cursor.current_text();
            p.cursor.advance();
            p.check(TokenKind::LParen).then_some((start, namespace, name))
        });

        let Some((start, namespace, name)) = prefix else {
            if self.cursor.peek_kind_at(1) == TokenKind::Colon {
                trace!(at = ?self.current_span(), "not a qualified call");
            }
            return None;
        };

        let mut calls = Vec::new();
        let mut ok = true;
        while self.check(TokenKind::LParen) {
            let args = self.parse_arg_list();
            ok &= args.is_ok();
            calls.extend(args.into_value());
        }

        let span = self.span_from(start);
        let call = ExprKind::QualifiedCall {
            namespace: namespace.to_owned(),
            name: name.to_owned(),
            calls,
        };
        Some(ParseOutcome::consumed(self.alloc(call, span), ok))
    }

    /// `()`, `(expr)` or a tuple `(a, b, ...)`.
    fn parse_group(&mut self) -> ParseOutcome<ExprId> {
        let start = self.cursor.advance().span;
        let (mut items, ok) = self.parse_delimited(TokenKind::RParen);
        let kind = if items.len() == 1 {
            ExprKind::Paren(items.remove(0))
        } else {
            ExprKind::Tuple(items)
        };
        let span = self.span_from(start);
        ParseOutcome::consumed(self.alloc(kind, span), ok)
    }

    /// `'[' (expression (',' expression)*)? ']'`
    fn parse_list(&mut self) -> ParseOutcome<ExprId> {
        let start = self.cursor.advance().span;
        let (items, ok) = self.parse_delimited(TokenKind::RBracket);
        let span = self.span_from(start);
        ParseOutcome::consumed(self.alloc(ExprKind::List(items), span), ok)
    }

    /// `{}` and `{k: v, ...}` are maps; `{a, b}` is a set. The `:` after
    /// the first element decides.
    fn parse_brace(&mut self) -> ParseOutcome<ExprId> {
        let start = self.cursor.advance().span;
        let (kind, ok) = self.with_context(ParseContext::NONE, Self::parse_brace_body);
        let span = self.span_from(start);
        ParseOutcome::consumed(self.alloc(kind, span), ok)
    }

    fn parse_brace_body(&mut self) -> (ExprKind, bool) {
        if self.cursor.eat(TokenKind::RBrace) {
            return (ExprKind::Map(Vec::new()), true);
        }
        let first = self.parse_map_key();
        if self.check(TokenKind::Colon) {
            let (entries, ok) = self.parse_map_entries(first);
            (ExprKind::Map(entries), ok)
        } else {
            let (items, ok) = self.parse_list_tail(smallvec![first], TokenKind::RBrace);
            (ExprKind::Set(items), ok)
        }
    }

    fn parse_map_key(&mut self) -> ExprId {
        let context = self.context.with(ParseContext::COLON_IS_SEPARATOR);
        self.with_context(context, Self::parse_expression)
    }

    /// Entries from the `:` after `first_key` through the closing `}`.
    fn parse_map_entries(&mut self, first_key: ExprId) -> (Vec<MapEntry>, bool) {
        let mut entries = Vec::new();
        let mut ok = true;
        let mut key = first_key;
        loop {
            let before = self.cursor.position();
            let value = if self.expect(TokenKind::Colon) {
                self.parse_expression()
            } else {
                ok = false;
                self.error_node()
            };
            entries.push(MapEntry { key, value });

            if self.cursor.eat(TokenKind::RBrace) {
                return (entries, ok);
            }
            if !self.check(TokenKind::Comma) {
                self.expected(MAP_SEPARATORS);
                ok = false;
                if !synchronize(&mut self.cursor, MAP_SEPARATORS) {
                    return (entries, ok);
                }
                if self.cursor.eat(TokenKind::RBrace) {
                    return (entries, ok);
                }
            }
            self.cursor.advance();
            key = self.parse_map_key();
            if self.cursor.position() == before {
                return (entries, false);
            }
        }
    }
}
