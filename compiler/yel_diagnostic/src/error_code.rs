//! Stable codes for every diagnostic the pipeline produces.
//!
//! The first digit names the phase: `E0xxx` lexer, `E1xxx` parser.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unrecognized character in expression text
    E0001,
    /// Unterminated string literal
    E0002,

    // Parser Errors (E1xxx)
    /// Expected a specific token
    E1001,
    /// Expected an expression
    E1002,
    /// `${` without a matching `}`
    E1003,
    /// Numeric literal out of range
    E1004,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// One-line description for `--explain`-style lookups.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unrecognized character in expression",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E1001 => "expected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed expression",
            ErrorCode::E1004 => "invalid numeric literal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
