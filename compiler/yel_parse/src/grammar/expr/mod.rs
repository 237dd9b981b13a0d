//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: sequence, assignment/lambda, ternary and the binary
//!   precedence chain
//! - `operators.rs`: operator matching
//! - `postfix.rs`: access chains (`.name`, `[index]`, `(args)`) and
//!   argument lists
//! - `primary.rs`: literals, identifiers, groups, qualified calls
//!
//! A level that matches none of its operators returns its operand
//! unchanged, so `a` is one `Ident` node however many levels it passed
//! through.

mod operators;
mod postfix;
mod primary;

use smallvec::smallvec;
use yel_ir::{ExprId, ExprKind, TokenKind};

use crate::context::ParseContext;
use crate::recovery::EXPR_FIRST;
use crate::stack::ensure_sufficient_stack;
use crate::Parser;

use operators::MAX_PRECEDENCE;

impl Parser<'_> {
    /// `assignExpr (';' assignExpr)*`
    pub(crate) fn parse_expression(&mut self) -> ExprId {
        let first = self.parse_assign();
        if !self.check(TokenKind::Semicolon) {
            return first;
        }

        let mut items = smallvec![first];
        while self.check(TokenKind::Semicolon) {
            let before = self.cursor.position();
            self.cursor.advance();
            items.push(self.parse_assign());
            if self.cursor.position() == before {
                break;
            }
        }
        let span = self.span_of(first).merge(self.previous_span());
        self.alloc(ExprKind::Sequence(items), span)
    }

    /// `choiceExpr (('=' | '->') assignExpr)?`, right-associative.
    ///
    /// Every nested expression passes through here, so this is where the
    /// stack is grown.
    fn parse_assign(&mut self) -> ExprId {
        ensure_sufficient_stack(|| self.parse_assign_inner())
    }

    fn parse_assign_inner(&mut self) -> ExprId {
        let left = self.parse_choice();
        let kind = self.current_kind();
        if !matches!(kind, TokenKind::Assign | TokenKind::Arrow) {
            return left;
        }
        self.cursor.advance();
        let right = self.parse_assign();

        let span = self.span_of(left).merge(self.span_of(right));
        let node = if kind == TokenKind::Assign {
            ExprKind::Assign {
                target: left,
                value: right,
            }
        } else {
            ExprKind::Lambda {
                param: left,
                body: right,
            }
        };
        self.alloc(node, span)
    }

    /// `orExpr ('?' choiceExpr ':' choiceExpr)?`, right-associative.
    ///
    /// Pinned on `?`: a missing `:` is reported and the else branch is
    /// still parsed if one is there.
    fn parse_choice(&mut self) -> ExprId {
        let cond = self.parse_binary(1);
        if !self.check(TokenKind::Question) {
            return cond;
        }
        self.cursor.advance();

        let then_context = self.context.with(ParseContext::COLON_IS_SEPARATOR);
        let then_branch = self.with_context(then_context, |p| {
            ensure_sufficient_stack(|| p.parse_choice())
        });

        let else_branch = if self.expect(TokenKind::Colon) || self.cursor.check_any(EXPR_FIRST) {
            ensure_sufficient_stack(|| self.parse_choice())
        } else {
            self.error_node()
        };

        let span = self.span_of(cond).merge(self.span_of(else_branch));
        self.alloc(
            ExprKind::Ternary {
                cond,
                then_branch,
                else_branch,
            },
            span,
        )
    }

    /// Left-associative binary operators of precedence `level` and up.
    fn parse_binary(&mut self, level: u8) -> ExprId {
        if level > MAX_PRECEDENCE {
            return self.parse_unary();
        }

        let mut left = self.parse_binary(level + 1);
        while let Some(op) = self.match_binary_op().filter(|op| op.precedence() == level) {
            self.cursor.advance();
            let right = self.parse_binary(level + 1);
            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Binary { op, left, right }, span);
        }
        left
    }

    /// `('-' | '!' | 'not' | 'empty') unaryExpr | accessExpr`
    fn parse_unary(&mut self) -> ExprId {
        let Some(op) = self.match_unary_op() else {
            return self.parse_access();
        };
        let start = self.current_span();
        self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary());
        let span = start.merge(self.span_of(operand));
        self.alloc(ExprKind::Unary { op, operand }, span)
    }
}
