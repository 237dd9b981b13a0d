//! Progress-aware parse results.
//!
//! | Progress | Result | Variant       | Caller does                       |
//! |----------|--------|---------------|-----------------------------------|
//! | consumed | ok     | `ConsumedOk`  | keep it                           |
//! | none     | ok     | `EmptyOk`     | keep it, nothing was there        |
//! | consumed | err    | `ConsumedErr` | keep the partial value, committed |
//! | none     | err    | `EmptyErr`    | try something else                |
//!
//! Diagnostics are pushed to the parser as they are found, so the
//! consumed-error case still carries a (partial) value: a pinned
//! production finishes what it can and the caller never backtracks
//! over it.

use crate::recovery::TokenSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    ConsumedOk { value: T },
    EmptyOk { value: T },
    /// Committed, then hit errors that are already reported.
    ConsumedErr { value: T },
    /// Nothing here starts this production.
    EmptyErr { expected: TokenSet },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        Self::ConsumedOk { value }
    }

    #[inline]
    pub fn empty_ok(value: T) -> Self {
        Self::EmptyOk { value }
    }

    #[cold]
    pub fn consumed_err(value: T) -> Self {
        Self::ConsumedErr { value }
    }

    #[inline]
    pub fn empty_err(expected: TokenSet) -> Self {
        Self::EmptyErr { expected }
    }

    /// Consumed when `ok`, consumed-with-errors otherwise.
    #[inline]
    pub fn consumed(value: T, ok: bool) -> Self {
        if ok {
            Self::ConsumedOk { value }
        } else {
            Self::ConsumedErr { value }
        }
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::ConsumedOk { .. } | Self::EmptyOk { .. })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        match self {
            Self::ConsumedOk { value } => ParseOutcome::ConsumedOk { value: f(value) },
            Self::EmptyOk { value } => ParseOutcome::EmptyOk { value: f(value) },
            Self::ConsumedErr { value } => ParseOutcome::ConsumedErr { value: f(value) },
            Self::EmptyErr { expected } => ParseOutcome::EmptyErr { expected },
        }
    }

    /// The value, if any was produced.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::ConsumedOk { value } | Self::EmptyOk { value } | Self::ConsumedErr { value } => {
                Some(value)
            }
            Self::EmptyErr { .. } => None,
        }
    }
}
