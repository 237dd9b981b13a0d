//! Lexing for Yel documents with embedded `${...}` expressions.
//!
//! Two scanners live here:
//!
//! - the expression lexer ([`ExprLexer`], [`tokenize`]): cooks
//!   `yel_lexer_core` raw tokens into expression [`TokenKind`]s
//! - the expression-boundary splitter ([`ExprSplitter`]): wraps a
//!   [`HostLexer`] and carves `${...}` regions out of scalar content,
//!   resumable from a saved [`ScanState`]
//!
//! [`collect_expressions`] and [`assemble`] turn a split stream into
//! lexable expression bodies with a [`BodyMap`] back to raw offsets.
//!
//! [`TokenKind`]: yel_ir::TokenKind

mod assemble;
mod brace_scan;
mod cook_escape;
mod cooker;
mod host;
mod keywords;
mod scan_state;
mod splitter;

pub use assemble::{assemble, collect_expressions, AssembledBody, BodyMap, ExprSpan, Segment};
pub use brace_scan::{find_expr_start, BraceScan};
pub use cook_escape::{parse_float, parse_int, unescape_string};
pub use cooker::{tokenize, ExprLexer};
pub use host::{HostLexer, HostToken, ScalarLexer};
pub use scan_state::{ScanState, StateError};
pub use splitter::{split_document, ExprSplitter, ResumeError, SplitToken};
