//! Recursive descent parser for embedded Yel expressions.
//!
//! Produces a flat tree in an [`ExprArena`] plus the diagnostics found on
//! the way. Parsing never fails: unparsable fragments become
//! [`ExprKind::Error`] nodes and the rest of the expression still parses.
//!
//! Entry points:
//!
//! - [`parse`] / [`parse_with`]: a bare expression body
//! - [`parse_span`] / [`parse_span_with`]: one located `${...}` of a document
//! - [`parse_all`]: every expression of a document
//! - [`ExprCache`]: memoized, thread-safe [`parse_span`]

mod cache;
mod context;
mod cursor;
mod grammar;
mod outcome;
mod recovery;
mod snapshot;
mod stack;

pub use cache::{CacheKey, ExprCache};
pub use context::ParseContext;
pub use cursor::{Cursor, TokenStream};
pub use outcome::ParseOutcome;
pub use recovery::{synchronize, TokenSet};
pub use snapshot::ParserSnapshot;

use yel_diagnostic::{expected_token, unclosed_expression, Diagnostic};
use yel_ir::{Expr, ExprArena, ExprId, ExprKind, Span, TokenKind};
use yel_lexer::{assemble, collect_expressions, split_document, AssembledBody, BodyMap, ExprSpan};

/// Parser tunables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Stop after this many significant tokens. The rest of the body is
    /// reported once and otherwise ignored.
    pub max_tokens: Option<usize>,
}

/// A parsed expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics anchored inside the node `id`.
    pub fn diagnostics_within(&self, id: ExprId) -> impl Iterator<Item = &Diagnostic> {
        let span = self.arena.try_get(id).map(|e| e.span);
        self.diagnostics
            .iter()
            .filter(move |d| span.is_some_and(|s| s.contains_span(d.span)))
    }

    /// The whole tree as an S-expression.
    pub fn to_sexpr(&self) -> String {
        self.arena.to_sexpr(self.root)
    }
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
    diagnostics: Vec<Diagnostic>,
    context: ParseContext,
}

impl<'a> Parser<'a> {
    /// `text` is the assembled body the stream was lexed from.
    pub fn new(stream: &'a TokenStream, text: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(stream, text),
            arena: ExprArena::new(),
            diagnostics: Vec::new(),
            context: ParseContext::NONE,
        }
    }

    /// Parse the whole stream as one expression.
    pub fn parse(mut self) -> ParseOutput {
        let root = self.parse_root();
        ParseOutput {
            arena: self.arena,
            root,
            diagnostics: self.diagnostics,
        }
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc(Expr::new(kind, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.try_get(id).map_or(Span::DUMMY, |e| e.span)
    }

    /// Record a diagnostic. A second diagnostic at the same span is
    /// dropped: nested productions that fail on one token report it once.
    fn report(&mut self, diagnostic: Diagnostic) {
        if self
            .diagnostics
            .last()
            .is_some_and(|last| last.span == diagnostic.span)
        {
            return;
        }
        tracing::trace!(span = ?diagnostic.span, message = %diagnostic.message, "parse error");
        self.diagnostics.push(diagnostic);
    }

    /// Report that one of `expected` should be at the current token.
    fn expected(&mut self, expected: TokenSet) {
        let found = self.cursor.found_text();
        self.report(expected_token(
            self.current_span(),
            &expected.format_expected(),
            found,
        ));
    }

    /// Consume `kind` or report it missing. The token is not skipped.
    fn expect(&mut self, kind: TokenKind) -> bool {
        if self.cursor.eat(kind) {
            true
        } else {
            self.expected(TokenSet::single(kind));
            false
        }
    }

    /// Zero-width placeholder at the current token.
    fn error_node(&mut self) -> ExprId {
        let at = Span::point(self.current_span().start);
        self.alloc(ExprKind::Error, at)
    }

    /// Run `f` under `context`, restoring the previous context after.
    fn with_context<T>(&mut self, context: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }
}

/// Parse a bare expression body.
pub fn parse(text: &str) -> ParseOutput {
    parse_with(text, ParseOptions::default())
}

pub fn parse_with(text: &str, options: ParseOptions) -> ParseOutput {
    let body = AssembledBody {
        text: text.to_owned(),
        map: BodyMap::Shifted { base: 0 },
    };
    parse_body(&body, options)
}

/// Parse one located expression of `source`. Spans in the result are
/// offsets into `source`.
pub fn parse_span(source: &str, expr: &ExprSpan) -> ParseOutput {
    parse_span_with(source, expr, ParseOptions::default())
}

pub fn parse_span_with(source: &str, expr: &ExprSpan, options: ParseOptions) -> ParseOutput {
    let body = assemble(source, expr);
    let mut output = parse_body(&body, options);
    if !expr.is_closed() {
        output
            .diagnostics
            .push(unclosed_expression(Span::point(expr.body_end()), expr.start));
    }
    output
}

/// Split `source` and parse every expression in it, in document order.
pub fn parse_all(source: &str) -> Vec<(ExprSpan, ParseOutput)> {
    let tokens = split_document(source);
    collect_expressions(&tokens)
        .into_iter()
        .map(|expr| {
            let output = parse_span(source, &expr);
            (expr, output)
        })
        .collect()
}

fn parse_body(body: &AssembledBody, options: ParseOptions) -> ParseOutput {
    let stream = TokenStream::lex(body, options.max_tokens);
    let mut output = Parser::new(&stream, &body.text).parse();
    if let (Some((cut, text_span)), Some(limit)) = (stream.truncated_at(), options.max_tokens) {
        output.diagnostics.push(
            expected_token(
                cut.span,
                TokenKind::Eof.display_name(),
                text_span.slice(&body.text),
            )
            .with_note(format!("token limit of {limit} reached")),
        );
    }
    output
}

#[cfg(test)]
mod tests;
