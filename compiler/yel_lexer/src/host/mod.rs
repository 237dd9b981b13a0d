//! Host tokenizer seam.
//!
//! The splitter never looks at host document structure. It consumes any
//! [`HostLexer`] producing scalar-content and line-structural tokens with
//! an opaque 16-bit state per token.

mod scalar;

pub use scalar::ScalarLexer;

use yel_ir::Token;

/// One host token plus the host state at its start.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct HostToken {
    pub token: Token,
    pub state: u16,
}

/// A resumable tokenizer for the host document.
///
/// Implementations must produce contiguous, non-empty tokens covering
/// `from..to` exactly.
pub trait HostLexer {
    /// Begin scanning `text[from..to]` in `state`.
    fn start(&mut self, text: &str, from: u32, to: u32, state: u16);

    /// Next token, or `None` at `to`.
    fn next_token(&mut self) -> Option<HostToken>;

    /// Whether scanning can restart cleanly from `state` at a token start.
    fn is_resumable(state: u16) -> bool;
}
