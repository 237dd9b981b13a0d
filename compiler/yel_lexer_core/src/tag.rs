//! Raw token tags produced by [`RawScanner`](crate::RawScanner).
//!
//! Tags carry no keyword information: every identifier-shaped run is
//! [`RawTag::Ident`]. Keyword resolution happens in the cooking layer so
//! that maximal munch is always applied first.

/// Raw token tag, one byte.
///
/// Discriminants are grouped by category:
/// - 0-15: identifiers and literals
/// - 32-63: operators
/// - 80-95: delimiters
/// - 112: trivia
/// - 240+: errors
/// - 255: EOF
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals ===
    /// `[A-Za-z_#$][A-Za-z0-9_]*`
    Ident = 0,
    Int = 1,
    Float = 2,
    /// Closed `'...'` or `"..."` literal.
    String = 3,

    // === Operators ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Bang = 37,
    Less = 38,
    Greater = 39,
    Equal = 40,
    Question = 41,
    Colon = 42,
    Dot = 43,
    /// `==`
    EqualEqual = 48,
    /// `!=`
    NotEqual = 49,
    /// `<=`
    LessEqual = 50,
    /// `>=`
    GreaterEqual = 51,
    /// `&&`
    AmpersandAmpersand = 52,
    /// `||`
    PipePipe = 53,
    /// `+=`
    PlusEqual = 54,
    /// `->`
    Arrow = 55,

    // === Delimiters ===
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Semicolon = 87,

    // === Trivia ===
    /// Run of spaces, tabs, and line breaks.
    Whitespace = 112,

    // === Errors ===
    /// Byte (or UTF-8 character) that starts no token.
    InvalidByte = 240,
    /// String literal reaching end of input before its closing quote.
    UnterminatedString = 241,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Fixed source text, for tags that have one.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            RawTag::Plus => "+",
            RawTag::Minus => "-",
            RawTag::Star => "*",
            RawTag::Slash => "/",
            RawTag::Percent => "%",
            RawTag::Bang => "!",
            RawTag::Less => "<",
            RawTag::Greater => ">",
            RawTag::Equal => "=",
            RawTag::Question => "?",
            RawTag::Colon => ":",
            RawTag::Dot => ".",
            RawTag::EqualEqual => "==",
            RawTag::NotEqual => "!=",
            RawTag::LessEqual => "<=",
            RawTag::GreaterEqual => ">=",
            RawTag::AmpersandAmpersand => "&&",
            RawTag::PipePipe => "||",
            RawTag::PlusEqual => "+=",
            RawTag::Arrow => "->",
            RawTag::LeftParen => "(",
            RawTag::RightParen => ")",
            RawTag::LeftBracket => "[",
            RawTag::RightBracket => "]",
            RawTag::LeftBrace => "{",
            RawTag::RightBrace => "}",
            RawTag::Comma => ",",
            RawTag::Semicolon => ";",
            _ => return None,
        })
    }
}

/// A tag plus byte length. The start offset is implied by the running sum
/// of previous lengths.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawTag>() == 1);
