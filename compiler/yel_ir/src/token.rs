//! Token vocabulary shared by the host tokenizer, the boundary splitter,
//! and the expression lexer.
//!
//! `TokenKind` is one closed enumeration partitioned into families that
//! never meet at the same grammar level:
//!
//! | Family | Produced by | Examples |
//! |--------|-------------|----------|
//! | [`TokenFamily::Host`] | host scalar tokenizer | `PlainText`, `DoubleQuotedText`, `LineBreak` |
//! | [`TokenFamily::Delimiter`] | boundary splitter | `ExprStart`, `ExprBody`, `ExprEnd` |
//! | [`TokenFamily::Expr`] | expression lexer | `Ident`, `Int`, `EqEq`, `Instanceof` |
//!
//! Kinds are fieldless and `#[repr(u8)]`; a token's text is always recovered
//! from the buffer through its span.

use std::fmt;

use crate::Span;

/// Closed token vocabulary.
///
/// Discriminants are dense from 0 so [`TokenKind::index`] can drive the
/// `u128` bitsets used for parser recovery sets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Host scalar content (0-12) ===
    /// Unquoted scalar text.
    PlainText = 0,
    /// `'` opening or closing a single-quoted scalar.
    SingleQuote,
    /// Content between single quotes.
    SingleQuotedText,
    /// `"` opening or closing a double-quoted scalar.
    DoubleQuote,
    /// Content between double quotes (escapes still raw).
    DoubleQuotedText,
    /// `|` or `>` block scalar header, with chomping/indent indicators.
    BlockHeader,
    /// One content line of a `|` block scalar.
    BlockLiteralText,
    /// One content line of a `>` block scalar.
    BlockFoldedText,
    /// `\n` or `\r\n`.
    LineBreak,
    /// Leading indentation of a line.
    Indent,
    /// Horizontal whitespace inside a line.
    Whitespace,
    /// `# ...` to end of line.
    Comment,
    /// Structural indicator: `:` or `-` followed by a separator.
    Indicator,

    // === Expression delimiters (13-15) ===
    /// Exactly `${`.
    ExprStart,
    /// Raw text of an expression body, or one continuation fragment of it.
    ExprBody,
    /// Exactly `}` closing an expression.
    ExprEnd,

    // === Expression literals (16-21) ===
    Ident,
    Int,
    Float,
    String,
    /// String literal that ran into the end of the expression.
    UnterminatedString,
    /// Unrecognized character. One per offending character.
    BadChar,

    // === Expression keywords (22-37) ===
    True,
    False,
    Null,
    Empty,
    Not,
    And,
    Or,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Instanceof,

    // === Multi-character operators (38-45) ===
    EqEq,
    BangEq,
    LtEq,
    GtEq,
    AmpAmp,
    PipePipe,
    PlusEq,
    Arrow,

    // === Single-character operators and punctuation (46-65) ===
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    Less,
    Greater,
    Assign,
    Question,
    Colon,
    Dot,
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // === Expression trivia and control ===
    /// Whitespace between expression tokens.
    Trivia,
    /// End of an expression token stream. Never produced from source text.
    Eof,
}

/// Which vocabulary a kind belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenFamily {
    Host,
    Delimiter,
    Expr,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 68] = [
        TokenKind::PlainText,
        TokenKind::SingleQuote,
        TokenKind::SingleQuotedText,
        TokenKind::DoubleQuote,
        TokenKind::DoubleQuotedText,
        TokenKind::BlockHeader,
        TokenKind::BlockLiteralText,
        TokenKind::BlockFoldedText,
        TokenKind::LineBreak,
        TokenKind::Indent,
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::Indicator,
        TokenKind::ExprStart,
        TokenKind::ExprBody,
        TokenKind::ExprEnd,
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::UnterminatedString,
        TokenKind::BadChar,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::Empty,
        TokenKind::Not,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Eq,
        TokenKind::Ne,
        TokenKind::Lt,
        TokenKind::Gt,
        TokenKind::Le,
        TokenKind::Ge,
        TokenKind::Instanceof,
        TokenKind::EqEq,
        TokenKind::BangEq,
        TokenKind::LtEq,
        TokenKind::GtEq,
        TokenKind::AmpAmp,
        TokenKind::PipePipe,
        TokenKind::PlusEq,
        TokenKind::Arrow,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Bang,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Assign,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::Dot,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Trivia,
        TokenKind::Eof,
    ];

    /// Dense discriminant index.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn from_index(index: u8) -> Option<TokenKind> {
        Self::ALL.get(index as usize).copied()
    }

    pub const fn family(self) -> TokenFamily {
        match self {
            TokenKind::PlainText
            | TokenKind::SingleQuote
            | TokenKind::SingleQuotedText
            | TokenKind::DoubleQuote
            | TokenKind::DoubleQuotedText
            | TokenKind::BlockHeader
            | TokenKind::BlockLiteralText
            | TokenKind::BlockFoldedText
            | TokenKind::LineBreak
            | TokenKind::Indent
            | TokenKind::Whitespace
            | TokenKind::Comment
            | TokenKind::Indicator => TokenFamily::Host,
            TokenKind::ExprStart | TokenKind::ExprBody | TokenKind::ExprEnd => {
                TokenFamily::Delimiter
            }
            _ => TokenFamily::Expr,
        }
    }

    /// Scalar-content kinds that may contain `${...}`.
    #[inline]
    pub const fn is_splittable(self) -> bool {
        matches!(
            self,
            TokenKind::PlainText
                | TokenKind::SingleQuotedText
                | TokenKind::DoubleQuotedText
                | TokenKind::BlockLiteralText
                | TokenKind::BlockFoldedText
        )
    }

    /// Splittable kinds whose scalar may continue on the next line, so an
    /// unclosed `${` keeps scanning into following tokens.
    #[inline]
    pub const fn supports_continuation(self) -> bool {
        matches!(
            self,
            TokenKind::PlainText | TokenKind::BlockLiteralText | TokenKind::BlockFoldedText
        )
    }

    /// Line-structural tokens pass through continuation mode untouched.
    #[inline]
    pub const fn is_line_structural(self) -> bool {
        matches!(self, TokenKind::LineBreak | TokenKind::Indent)
    }

    /// Skipped by the expression parser.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Trivia)
    }

    /// Keyword spellings that may stand in for a member name after `.`.
    pub const fn is_keyword(self) -> bool {
        (self as u8) >= (TokenKind::True as u8) && (self as u8) <= (TokenKind::Instanceof as u8)
    }

    /// Fixed source text, for kinds that have one.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::SingleQuote => "'",
            TokenKind::DoubleQuote => "\"",
            TokenKind::ExprStart => "${",
            TokenKind::ExprEnd | TokenKind::RBrace => "}",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Empty => "empty",
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Div => "div",
            TokenKind::Mod => "mod",
            TokenKind::Eq => "eq",
            TokenKind::Ne => "ne",
            TokenKind::Lt => "lt",
            TokenKind::Gt => "gt",
            TokenKind::Le => "le",
            TokenKind::Ge => "ge",
            TokenKind::Instanceof => "instanceof",
            TokenKind::EqEq => "==",
            TokenKind::BangEq => "!=",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::PlusEq => "+=",
            TokenKind::Arrow => "->",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Bang => "!",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::Assign => "=",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            _ => return None,
        })
    }

    /// Name used in "expected ..." messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::PlainText => "plain text",
            TokenKind::SingleQuotedText => "single-quoted text",
            TokenKind::DoubleQuotedText => "double-quoted text",
            TokenKind::BlockHeader => "block scalar header",
            TokenKind::BlockLiteralText => "literal block text",
            TokenKind::BlockFoldedText => "folded block text",
            TokenKind::LineBreak => "line break",
            TokenKind::Indent => "indentation",
            TokenKind::Whitespace | TokenKind::Trivia => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Indicator => "indicator",
            TokenKind::ExprBody => "expression body",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String | TokenKind::UnterminatedString => "string",
            TokenKind::BadChar => "bad character",
            TokenKind::Eof => "end of expression",
            other => match other.lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified byte range.
///
/// Invariant: `span.start < span.end` for every token a lexer emits. Only
/// the parser's synthetic [`TokenKind::Eof`] is zero-width.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Token text within `source`.
    #[inline]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source)
    }
}

const _: () = assert!(TokenKind::Eof as usize == TokenKind::ALL.len() - 1);
const _: () = assert!(TokenKind::ALL.len() <= 128);
