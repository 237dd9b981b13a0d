//! Access chains and argument lists.
//!
//! `primary ('.' name argList? | '[' expression ']' argList? | argList)*`
//!
//! Opening `(` and `[` pin their production: once consumed, a missing
//! separator or closer is reported at the offending token and parsing
//! resynchronizes inside the group instead of unwinding past it.

use smallvec::smallvec;
use yel_diagnostic::expected_expression;
use yel_ir::{ExprId, ExprKind, ExprList, Span, Suffix, TokenKind};

use crate::context::ParseContext;
use crate::outcome::ParseOutcome;
use crate::recovery::{synchronize, TokenSet};
use crate::Parser;

impl Parser<'_> {
    /// `primaryExpr suffix*`. Without suffixes this is the primary itself.
    pub(super) fn parse_access(&mut self) -> ExprId {
        let receiver = match self.parse_primary() {
            ParseOutcome::ConsumedOk { value }
            | ParseOutcome::EmptyOk { value }
            | ParseOutcome::ConsumedErr { value } => value,
            ParseOutcome::EmptyErr { .. } => return self.missing_expression(),
        };

        let mut suffixes = Vec::new();
        loop {
            let before = self.cursor.position();
            let Some(suffix) = self.parse_suffix().into_value() else {
                break;
            };
            suffixes.push(suffix);
            if self.cursor.position() == before {
                break;
            }
        }

        let Some(last) = suffixes.last() else {
            return receiver;
        };
        let span = self.span_of(receiver).merge(last.span());
        self.alloc(ExprKind::Access { receiver, suffixes }, span)
    }

    /// Report a missing expression and stand in an error node for it.
    /// Nothing is consumed.
    pub(super) fn missing_expression(&mut self) -> ExprId {
        let found = self.cursor.found_text();
        self.report(expected_expression(self.current_span(), found));
        self.error_node()
    }

    fn parse_suffix(&mut self) -> ParseOutcome<Suffix> {
        match self.current_kind() {
            TokenKind::Dot => self.parse_dot_suffix(),
            TokenKind::LBracket => self.parse_bracket_suffix(),
            TokenKind::LParen => {
                let start = self.current_span();
                let outcome = self.parse_arg_list();
                let span = self.span_from(start);
                outcome.map(|args| Suffix::Call { args, span })
            }
            _ => ParseOutcome::empty_err(
                TokenSet::new()
                    .with(TokenKind::Dot)
                    .with(TokenKind::LBracket)
                    .with(TokenKind::LParen),
            ),
        }
    }

    /// `'.' memberName argList?`. Keywords are valid member names.
    fn parse_dot_suffix(&mut self) -> ParseOutcome<Suffix> {
        let start = self.cursor.advance().span;
        let kind = self.current_kind();
        let mut ok = true;

        let name = if kind == TokenKind::Ident || kind.is_keyword() {
            let name = self.cursor.current_text().to_owned();
            self.cursor.advance();
            name
        } else {
            self.expected(TokenSet::single(TokenKind::Ident));
            ok = false;
            String::new()
        };

        let args = self.parse_optional_args();
        ok &= args.is_ok();
        let args = args.into_value().flatten();
        let span = self.span_from(start);
        ParseOutcome::consumed(Suffix::Dot { name, args, span }, ok)
    }

    /// `'[' expression ']' argList?`
    fn parse_bracket_suffix(&mut self) -> ParseOutcome<Suffix> {
        let start = self.cursor.advance().span;
        let index = self.with_context(ParseContext::NONE, Self::parse_expression);

        let mut ok = self.expect(TokenKind::RBracket);
        if !ok && synchronize(&mut self.cursor, TokenSet::single(TokenKind::RBracket)) {
            self.cursor.advance();
        }

        let args = self.parse_optional_args();
        ok &= args.is_ok();
        let args = args.into_value().flatten();
        let span = self.span_from(start);
        ParseOutcome::consumed(Suffix::Bracket { index, args, span }, ok)
    }

    /// `argList?`. `EmptyOk` holding `None` when no `(` follows.
    fn parse_optional_args(&mut self) -> ParseOutcome<Option<ExprList>> {
        if !self.check(TokenKind::LParen) {
            return ParseOutcome::empty_ok(None);
        }
        self.parse_arg_list().map(Some)
    }

    /// `'(' (expression (',' expression)*)? ')'`
    pub(super) fn parse_arg_list(&mut self) -> ParseOutcome<ExprList> {
        if !self.check(TokenKind::LParen) {
            return ParseOutcome::empty_err(TokenSet::single(TokenKind::LParen));
        }
        self.cursor.advance();
        let (args, ok) = self.parse_delimited(TokenKind::RParen);
        ParseOutcome::consumed(args, ok)
    }

    /// Comma-separated expressions up to and including `close`, the opener
    /// already consumed. Returns `false` if anything had to be skipped.
    pub(super) fn parse_delimited(&mut self, close: TokenKind) -> (ExprList, bool) {
        self.with_context(ParseContext::NONE, |p| {
            if p.cursor.eat(close) {
                return (ExprList::new(), true);
            }
            let first = p.parse_expression();
            p.parse_list_tail(smallvec![first], close)
        })
    }

    /// The rest of a comma-separated list whose elements so far are `items`.
    pub(super) fn parse_list_tail(
        &mut self,
        mut items: ExprList,
        close: TokenKind,
    ) -> (ExprList, bool) {
        let separators = TokenSet::new().with(TokenKind::Comma).with(close);
        let mut ok = true;
        loop {
            let before = self.cursor.position();
            if self.cursor.eat(close) {
                return (items, ok);
            }
            if self.cursor.eat(TokenKind::Comma) {
                items.push(self.parse_expression());
                continue;
            }

            self.expected(separators);
            ok = false;
            if !synchronize(&mut self.cursor, separators) || self.cursor.position() == before {
                return (items, ok);
            }
        }
    }

    /// Span from `start` through the last consumed token.
    pub(super) fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }
}
