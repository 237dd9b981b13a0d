//! Body assembly: from split tokens to one expression text.
//!
//! The `ExprBody` fragments of one expression are joined into a single
//! buffer for the expression lexer. [`BodyMap`] positions offsets in that
//! buffer back onto the raw document:
//!
//! - one fragment: a constant shift
//! - several fragments (multi-line continuation): joined with `\n`, mapped
//!   per segment
//! - double-quoted host: escape-decoded, mapped through the [`OffsetMap`]

use yel_ir::{Span, TokenKind};
use yel_lexer_core::{decode, OffsetMap};

use crate::splitter::SplitToken;

/// The located parts of one `${...}` expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExprSpan {
    /// The `${` token.
    pub start: Span,
    /// `ExprBody` fragments in order. Empty for `${}`.
    pub fragments: Vec<Span>,
    /// The closing `}`, or `None` for an unclosed expression.
    pub end: Option<Span>,
    /// Host kind the expression was found in.
    pub variant: TokenKind,
}

impl ExprSpan {
    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }

    /// From `${` through `}` or the last fragment.
    pub fn span(&self) -> Span {
        let last = self
            .end
            .or_else(|| self.fragments.last().copied())
            .unwrap_or(self.start);
        self.start.merge(last)
    }

    /// Raw offset where an unclosed expression ran out of text.
    pub fn body_end(&self) -> u32 {
        self.fragments.last().map_or(self.start.end, |f| f.end)
    }
}

/// Group split tokens into expressions.
///
/// Line breaks, indentation and whitespace between fragments are skipped.
/// Any other token ends an expression that has not seen its `}`.
pub fn collect_expressions(tokens: &[SplitToken]) -> Vec<ExprSpan> {
    let mut out = Vec::new();
    let mut open: Option<ExprSpan> = None;

    for t in tokens {
        let span = t.token.span;
        match t.token.kind {
            TokenKind::ExprStart => {
                out.extend(open.take());
                open = Some(ExprSpan {
                    start: span,
                    fragments: Vec::new(),
                    end: None,
                    variant: t.origin,
                });
            }
            TokenKind::ExprBody => {
                if let Some(expr) = open.as_mut() {
                    expr.fragments.push(span);
                }
            }
            TokenKind::ExprEnd => {
                if let Some(mut expr) = open.take() {
                    expr.end = Some(span);
                    out.push(expr);
                }
            }
            kind if kind.is_line_structural() || kind == TokenKind::Whitespace => {}
            _ => out.extend(open.take()),
        }
    }
    out.extend(open);
    out
}

/// One fragment's place in a joined body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub assembled_start: u32,
    pub raw_start: u32,
    pub len: u32,
}

/// Assembled-offset to raw-offset translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BodyMap {
    Shifted { base: u32 },
    /// Fragments joined with one `\n`. A separator maps to the end of the
    /// fragment before it.
    Segmented(Vec<Segment>),
    Decoded(OffsetMap),
}

impl BodyMap {
    pub fn to_raw(&self, offset: u32) -> u32 {
        match self {
            BodyMap::Shifted { base } => base + offset,
            BodyMap::Segmented(segments) => {
                let idx = segments.partition_point(|s| s.assembled_start <= offset);
                let Some(seg) = idx.checked_sub(1).and_then(|i| segments.get(i)) else {
                    return segments.first().map_or(0, |s| s.raw_start);
                };
                seg.raw_start + (offset - seg.assembled_start).min(seg.len)
            }
            BodyMap::Decoded(map) => map.to_raw(offset),
        }
    }

    pub fn map_span(&self, span: Span) -> Span {
        Span::new(self.to_raw(span.start), self.to_raw(span.end))
    }
}

/// An expression's lexable text plus its map back to the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledBody {
    pub text: String,
    pub map: BodyMap,
}

/// Join the fragments of `expr`, taken from `source`.
pub fn assemble(source: &str, expr: &ExprSpan) -> AssembledBody {
    match expr.fragments.as_slice() {
        [] => AssembledBody {
            text: String::new(),
            map: BodyMap::Shifted {
                base: expr.start.end,
            },
        },
        [only] if expr.variant == TokenKind::DoubleQuotedText => {
            let decoded = decode(source, only.start, only.end);
            AssembledBody {
                text: decoded.text,
                map: BodyMap::Decoded(decoded.map),
            }
        }
        [only] => AssembledBody {
            text: only.slice(source).to_owned(),
            map: BodyMap::Shifted { base: only.start },
        },
        fragments => {
            let mut text = String::new();
            let mut segments = Vec::with_capacity(fragments.len());
            for (i, frag) in fragments.iter().enumerate() {
                if i > 0 {
                    text.push('\n');
                }
                segments.push(Segment {
                    assembled_start: u32::try_from(text.len()).unwrap_or(u32::MAX),
                    raw_start: frag.start,
                    len: frag.len(),
                });
                text.push_str(frag.slice(source));
            }
            AssembledBody {
                text,
                map: BodyMap::Segmented(segments),
            }
        }
    }
}
