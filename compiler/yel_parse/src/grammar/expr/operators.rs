//! Operator matching.
//!
//! Keyword spellings map onto the same operator as their symbols.

use yel_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

/// Tightest binary precedence level.
pub(super) const MAX_PRECEDENCE: u8 = 7;

impl Parser<'_> {
    /// The binary operator at the current token, if any.
    pub(super) fn match_binary_op(&self) -> Option<BinaryOp> {
        let op = match self.current_kind() {
            TokenKind::PipePipe | TokenKind::Or => BinaryOp::Or,
            TokenKind::AmpAmp | TokenKind::And => BinaryOp::And,
            TokenKind::EqEq | TokenKind::Eq => BinaryOp::Eq,
            TokenKind::BangEq | TokenKind::Ne => BinaryOp::NotEq,
            TokenKind::Less | TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Greater | TokenKind::Gt => BinaryOp::Gt,
            TokenKind::LtEq | TokenKind::Le => BinaryOp::LtEq,
            TokenKind::GtEq | TokenKind::Ge => BinaryOp::GtEq,
            TokenKind::Instanceof => BinaryOp::InstanceOf,
            TokenKind::PlusEq => BinaryOp::Concat,
            TokenKind::Plus => BinaryOp::Add,
            TokenKind::Minus => BinaryOp::Sub,
            TokenKind::Star => BinaryOp::Mul,
            TokenKind::Slash | TokenKind::Div => BinaryOp::Div,
            TokenKind::Percent | TokenKind::Mod => BinaryOp::Mod,
            _ => return None,
        };
        Some(op)
    }

    /// The prefix operator at the current token, if any.
    pub(super) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang | TokenKind::Not => Some(UnaryOp::Not),
            TokenKind::Empty => Some(UnaryOp::Empty),
            _ => None,
        }
    }
}
