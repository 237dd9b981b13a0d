//! Grammar productions, as `impl Parser` blocks.
//!
//! - `expr`: the expression grammar, lowest precedence first
//!
//! Every production returns an [`ExprId`]. Errors are reported as they
//! are found and an error node stands in for whatever was missing.

mod expr;

use yel_ir::ExprId;

use crate::recovery::EXPR_END;
use crate::Parser;

impl Parser<'_> {
    /// An expression followed by the end of the stream.
    pub(crate) fn parse_root(&mut self) -> ExprId {
        let root = self.parse_expression();
        if !self.cursor.is_at_end() {
            self.expected(EXPR_END);
            while !self.cursor.is_at_end() {
                self.cursor.advance();
            }
        }
        root
    }
}
