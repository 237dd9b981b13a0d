//! Memoized expression parses.
//!
//! Expressions are parsed the first time something asks for their tree.
//! [`ExprCache`] keys the result by where the expression sits and what its
//! raw text is, and hands out shared [`Arc`]s. Concurrent first requests
//! for one key parse once: the losing callers wait on the shard lock and
//! get the winner's result.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use dashmap::DashMap;
use rustc_hash::{FxBuildHasher, FxHasher};
use tracing::trace;
use yel_ir::{Span, TokenKind};
use yel_lexer::ExprSpan;

use crate::{parse_span, ParseOutput};

/// Identity of one expression occurrence.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CacheKey {
    /// `${` through `}` (or the end of an unclosed body).
    pub span: Span,
    /// Host scalar kind the expression sits in.
    pub variant: TokenKind,
    /// Hash of the raw text under `span`.
    pub text_hash: u64,
}

impl CacheKey {
    pub fn new(source: &str, expr: &ExprSpan) -> Self {
        let span = expr.span();
        let text = source.get(span.to_range()).unwrap_or_default();
        let mut hasher = FxHasher::default();
        text.hash(&mut hasher);
        CacheKey {
            span,
            variant: expr.variant,
            text_hash: hasher.finish(),
        }
    }
}

/// Thread-safe parse cache.
#[derive(Default)]
pub struct ExprCache {
    parsed: DashMap<CacheKey, Arc<ParseOutput>, FxBuildHasher>,
}

impl ExprCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree for `expr`, parsing it on first request.
    pub fn get_or_parse(&self, source: &str, expr: &ExprSpan) -> Arc<ParseOutput> {
        let key = CacheKey::new(source, expr);

        // Fast path: already parsed
        if let Some(hit) = self.parsed.get(&key) {
            trace!(span = ?key.span, "expression cache hit");
            return Arc::clone(hit.value());
        }

        let entry = self.parsed.entry(key).or_insert_with(|| {
            trace!(span = ?key.span, "expression cache miss");
            Arc::new(parse_span(source, expr))
        });
        Arc::clone(entry.value())
    }

    /// A previously parsed tree, without parsing.
    pub fn get(&self, source: &str, expr: &ExprSpan) -> Option<Arc<ParseOutput>> {
        self.parsed
            .get(&CacheKey::new(source, expr))
            .map(|hit| Arc::clone(hit.value()))
    }

    pub fn len(&self) -> usize {
        self.parsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsed.is_empty()
    }

    /// Drop every entry, e.g. after the document changed.
    pub fn clear(&self) {
        self.parsed.clear();
    }
}
