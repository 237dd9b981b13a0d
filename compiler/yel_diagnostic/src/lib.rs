//! Diagnostics for the embedded expression pipeline.
//!
//! - Error codes for searchability
//! - A fixed message shape per [`DiagnosticKind`]
//! - A raw-buffer span anchoring the problem
//!
//! Diagnostics are returned alongside results and never used for control
//! flow.

mod diagnostic;
mod error_code;
mod line_index;

pub use diagnostic::{
    bad_character, expected_expression, expected_token, invalid_number, unclosed_expression,
    unterminated_string, Diagnostic, DiagnosticKind, Label,
};
pub use error_code::ErrorCode;
pub use line_index::LineIndex;
