//! Yel IR: shared data types for the embedded expression pipeline.
//!
//! - [`Span`]: half-open byte ranges into the raw document buffer
//! - [`Token`] / [`TokenKind`]: the closed token vocabulary used by the host
//!   tokenizer, the boundary splitter, and the expression lexer
//! - [`ExprArena`] and friends: the flat expression syntax tree
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)`
//!   indices into one arena per parse
//! - **Raw Coordinates**: every span points into the raw buffer, whatever
//!   decoding or reassembly happened before lexing
//!
//! Types that contain floats store them as `u64` bits for `Hash`.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, Expr, ExprArena, ExprId, ExprKind, ExprList, Literal, MapEntry, Suffix, UnaryOp,
};
pub use span::{Span, SpanError};
pub use token::{Token, TokenFamily, TokenKind};
