//! Core diagnostic types.
//!
//! Diagnostics are data: the parser returns them next to a (possibly
//! partial) tree and never aborts on one. Presentation layers read
//! [`Diagnostic`]'s `Display` output, which has one of two fixed shapes:
//!
//! ```text
//! Expected: `)` or `,` expected, got ']'
//! Unclosed expression: missing '}'
//! ```

use std::fmt;

use yel_ir::Span;

use crate::ErrorCode;

/// What class of problem a diagnostic reports.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    /// A required token or expression was not found.
    Expected,
    /// `${` ran off the end of its scalar without a `}`.
    UnclosedExpression,
    /// A literal token that cannot be represented.
    InvalidLiteral,
}

impl DiagnosticKind {
    pub const fn title(self) -> &'static str {
        match self {
            DiagnosticKind::Expected => "Expected",
            DiagnosticKind::UnclosedExpression => "Unclosed expression",
            DiagnosticKind::InvalidLiteral => "Invalid literal",
        }
    }
}

/// A secondary location with an explanation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub kind: DiagnosticKind,
    /// Raw-buffer location of the offending token or failure point.
    pub span: Span,
    /// Body of the message, without the kind title.
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode, kind: DiagnosticKind, span: Span) -> Self {
        Diagnostic {
            code,
            kind,
            span,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.title(), self.message)
    }
}

/// `<expected> expected, got '<found>'`.
///
/// `expected` is a pre-formatted token set such as `` `)` or `,` ``.
#[cold]
pub fn expected_token(span: Span, expected: &str, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1001, DiagnosticKind::Expected, span)
        .with_message(format!("{expected} expected, got '{found}'"))
}

/// `expression expected, got '<found>'`.
#[cold]
pub fn expected_expression(span: Span, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1002, DiagnosticKind::Expected, span)
        .with_message(format!("expression expected, got '{found}'"))
}

/// Anchored at the point where scanning gave up.
#[cold]
pub fn unclosed_expression(span: Span, open: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1003, DiagnosticKind::UnclosedExpression, span)
        .with_message("missing '}'")
        .with_label(open, "expression opened here")
}

#[cold]
pub fn invalid_number(span: Span, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E1004, DiagnosticKind::InvalidLiteral, span)
        .with_message(format!("numeric literal '{text}' is out of range"))
}

#[cold]
pub fn unterminated_string(span: Span) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002, DiagnosticKind::Expected, span)
        .with_message("closing quote expected, got 'end of expression'")
}

#[cold]
pub fn bad_character(span: Span, found: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001, DiagnosticKind::Expected, span)
        .with_message(format!("expression expected, got '{found}'"))
}
