//! Expression-boundary splitter.
//!
//! Wraps a [`HostLexer`] and re-emits its token stream with every
//! `${...}` region inside scalar content decomposed into `ExprStart`,
//! `ExprBody` and `ExprEnd` tokens. Everything else passes through.
//!
//! ```text
//! host token ──► find `${` ──► prefix │ ExprStart │ body… │ ExprEnd │ rest
//!                                      (continuation: body spans host tokens)
//! ```
//!
//! An expression left open at the end of a plain or block-scalar token is
//! carried into following tokens (continuation mode). Line breaks,
//! indentation and whitespace pass through without touching the carried
//! brace and quote state. In a single-line quoted scalar an open expression
//! ends with the token and no `ExprEnd` is emitted.
//!
//! # Restart contract
//!
//! Every emitted token carries the [`ScanState`] at its start. Scanning
//! resumed at a token's start with that state reproduces the rest of the
//! stream exactly, provided [`ExprSplitter::is_resumable`] holds for it.

use std::collections::VecDeque;

use thiserror::Error;
use tracing::{debug, trace};
use yel_ir::{Span, Token, TokenKind};
use yel_lexer_core::decode;

use crate::brace_scan::{find_expr_start, BraceScan};
use crate::host::{HostLexer, HostToken, ScalarLexer};
use crate::scan_state::ScanState;

/// One emitted token with its restart state.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SplitToken {
    pub token: Token,
    /// Splitter state at the start of this token.
    pub state: ScanState,
    /// Kind of the host token this token was cut from.
    pub origin: TokenKind,
}

/// `resume` was called with a state that cannot be restarted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResumeError {
    #[error("cannot resume at offset {offset}: scan state {state:?} is not resumable")]
    NotResumable { offset: u32, state: ScanState },
}

/// Expression-boundary splitter over one buffer.
pub struct ExprSplitter<'a, H: HostLexer> {
    text: &'a str,
    host: H,
    /// Pending sub-tokens of the last host token.
    queue: VecDeque<SplitToken>,
    current: Option<SplitToken>,
    /// Expression carried open from a previous host token.
    carried: Option<BraceScan>,
    start_state: ScanState,
}

impl<'a, H: HostLexer> ExprSplitter<'a, H> {
    /// Begin scanning `text[from..to]` in `state`.
    ///
    /// A carried-continuation state is honored here; [`resume`](Self::resume)
    /// is the checked entry point for incremental re-lexing.
    pub fn start(mut host: H, text: &'a str, from: u32, to: u32, state: ScanState) -> Self {
        host.start(text, from, to, state.host_state);
        let carried = state.in_continuation.then_some(BraceScan {
            depth: u32::from(state.brace_depth.max(1)),
            in_single_quote: state.in_single_quote,
            in_double_quote: state.in_double_quote,
        });
        ExprSplitter {
            text,
            host,
            queue: VecDeque::new(),
            current: None,
            carried,
            start_state: state,
        }
    }

    /// Restart at `offset`, which must be the start of a token whose
    /// reported state was `state`.
    pub fn resume(
        host: H,
        text: &'a str,
        offset: u32,
        to: u32,
        state: ScanState,
    ) -> Result<Self, ResumeError> {
        if !Self::is_resumable(state) {
            debug!(offset, ?state, "rejected resume from non-resumable state");
            return Err(ResumeError::NotResumable { offset, state });
        }
        Ok(Self::start(host, text, offset, to, state))
    }

    /// Whether scanning may restart from `state` at a token start.
    pub fn is_resumable(state: ScanState) -> bool {
        !state.in_continuation && !state.mid_segment && H::is_resumable(state.host_state)
    }

    /// Move to the next token.
    pub fn advance(&mut self) -> Option<Token> {
        if self.queue.is_empty() {
            let host = self.host.next_token()?;
            self.split(host);
        }
        self.current = self.queue.pop_front();
        self.current.map(|t| t.token)
    }

    pub fn current(&self) -> Option<&SplitToken> {
        self.current.as_ref()
    }

    pub fn token(&self) -> Option<Token> {
        self.current.map(|t| t.token)
    }

    pub fn kind(&self) -> Option<TokenKind> {
        self.current.map(|t| t.token.kind)
    }

    pub fn span(&self) -> Option<Span> {
        self.current.map(|t| t.token.span)
    }

    /// State at the start of the current token. Before the first
    /// [`advance`](Self::advance), the state scanning started in.
    pub fn state(&self) -> ScanState {
        self.current.map_or(self.start_state, |t| t.state)
    }

    fn split(&mut self, host: HostToken) {
        let HostToken { token, state } = host;
        let kind = token.kind;
        let mut sink = Sink {
            queue: &mut self.queue,
            host_state: state,
            origin: kind,
            segment: 0,
            carrying: self.carried.is_some(),
        };

        if let Some(open) = self.carried {
            if kind.is_line_structural() || kind == TokenKind::Whitespace {
                sink.push(kind, token.span.start, token.span.end, Some(open));
                return;
            }
            if !kind.is_splittable() {
                trace!(offset = token.span.start, %kind, "continuation ended without '}}'");
                self.carried = None;
                sink.push(kind, token.span.start, token.span.end, Some(open));
                return;
            }
        }

        let (start, end) = (token.span.start, token.span.end);
        if !kind.is_splittable() {
            sink.push(kind, start, end, None);
            return;
        }

        let mut at = start;
        if let Some(mut scan) = self.carried.take() {
            let before = scan;
            match find_close(self.text, kind, at, end, &mut scan) {
                Some(close) => {
                    if close > at {
                        sink.push(TokenKind::ExprBody, at, close, Some(before));
                    }
                    sink.push(TokenKind::ExprEnd, close, close + 1, Some(BraceScan::OPENED));
                    sink.carrying = false;
                    trace!(offset = close, "continuation closed");
                    at = close + 1;
                }
                None => {
                    sink.push(TokenKind::ExprBody, at, end, Some(before));
                    self.carried = Some(scan);
                    return;
                }
            }
        }

        let bytes = self.text.as_bytes().get(start as usize..end as usize).unwrap_or_default();
        while at < end {
            let Some(rel) = find_expr_start(bytes, (at - start) as usize) else {
                sink.push(kind, at, end, None);
                break;
            };
            let dollar = start + rel as u32;
            if dollar > at {
                sink.push(kind, at, dollar, None);
            }
            sink.push(TokenKind::ExprStart, dollar, dollar + 2, None);

            let body = dollar + 2;
            let mut scan = BraceScan::OPENED;
            match find_close(self.text, kind, body, end, &mut scan) {
                Some(close) => {
                    if close > body {
                        sink.push(TokenKind::ExprBody, body, close, Some(BraceScan::OPENED));
                    }
                    sink.push(TokenKind::ExprEnd, close, close + 1, Some(BraceScan::OPENED));
                    at = close + 1;
                }
                None => {
                    if body < end {
                        sink.push(TokenKind::ExprBody, body, end, Some(BraceScan::OPENED));
                    }
                    if kind.supports_continuation() {
                        trace!(offset = dollar, %kind, "expression continues past token end");
                        self.carried = Some(scan);
                    } else {
                        trace!(offset = dollar, %kind, "unclosed expression");
                    }
                    break;
                }
            }
        }
    }
}

impl<H: HostLexer> Iterator for ExprSplitter<'_, H> {
    type Item = SplitToken;

    fn next(&mut self) -> Option<SplitToken> {
        self.advance()?;
        self.current
    }
}

/// Split a whole document with the reference [`ScalarLexer`].
pub fn split_document(text: &str) -> Vec<SplitToken> {
    let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
    ExprSplitter::start(ScalarLexer::new(), text, 0, len, ScanState::INITIAL).collect()
}

/// Collects the sub-tokens of one host token.
struct Sink<'q> {
    queue: &'q mut VecDeque<SplitToken>,
    host_state: u16,
    origin: TokenKind,
    segment: u32,
    /// The expression open at this point was carried from an earlier token.
    carrying: bool,
}

impl Sink<'_> {
    /// Emit `start..end`. `open` is the expression scan state at `start`.
    fn push(&mut self, kind: TokenKind, start: u32, end: u32, open: Option<BraceScan>) {
        let open = open.unwrap_or(BraceScan {
            depth: 0,
            in_single_quote: false,
            in_double_quote: false,
        });
        let state = ScanState {
            host_state: self.host_state,
            in_continuation: self.carrying,
            brace_depth: ScanState::clamp_depth(open.depth),
            in_single_quote: open.in_single_quote,
            in_double_quote: open.in_double_quote,
            mid_segment: self.segment > 0,
        };
        self.queue.push_back(SplitToken {
            token: Token::new(kind, Span::new(start, end)),
            state,
            origin: self.origin,
        });
        self.segment += 1;
    }
}

/// Raw offset of the `}` closing the expression within `start..end`.
///
/// Double-quoted content is scanned after host escape decoding so `\"`
/// toggles quote state like the expression lexer will see it.
fn find_close(
    text: &str,
    kind: TokenKind,
    start: u32,
    end: u32,
    scan: &mut BraceScan,
) -> Option<u32> {
    if kind == TokenKind::DoubleQuotedText {
        let decoded = decode(text, start, end);
        return scan
            .scan(decoded.text.as_bytes())
            .map(|i| decoded.map.to_raw(i as u32));
    }
    let raw = text.get(start as usize..end as usize)?;
    scan.scan(raw.as_bytes()).map(|i| start + i as u32)
}

#[cfg(test)]
mod tests;
