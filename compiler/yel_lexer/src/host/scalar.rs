//! Reference tokenizer for YAML-like host documents.
//!
//! Line oriented and structure blind: it classifies scalar content, quotes,
//! block scalars and the few indicators that end a plain scalar, but never
//! builds mappings or sequences.
//!
//! # Host state
//!
//! | Bits | Field                            |
//! |------|----------------------------------|
//! | 0-3  | scan mode                        |
//! | 4-15 | line indentation, saturating     |
//!
//! Block-scalar body modes also depend on the block's content indentation,
//! which is not encoded. Those states are not resumable.

use yel_ir::{Span, Token, TokenKind};
use yel_lexer_core::{Cursor, SourceBuffer};

use super::{HostLexer, HostToken};
use crate::brace_scan::{find_expr_start, BraceScan};

const MODE_MASK: u16 = 0xF;
const INDENT_SHIFT: u16 = 4;
const MAX_INDENT: u32 = 0x0FFF;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(u8)]
enum Mode {
    LineStart = 0,
    InLine = 1,
    InDouble = 2,
    InSingle = 3,
    AfterLiteralHeader = 4,
    AfterFoldedHeader = 5,
    LiteralLineStart = 6,
    FoldedLineStart = 7,
    LiteralText = 8,
    FoldedText = 9,
}

impl Mode {
    fn from_bits(bits: u16) -> Option<Mode> {
        Some(match bits {
            0 => Mode::LineStart,
            1 => Mode::InLine,
            2 => Mode::InDouble,
            3 => Mode::InSingle,
            4 => Mode::AfterLiteralHeader,
            5 => Mode::AfterFoldedHeader,
            6 => Mode::LiteralLineStart,
            7 => Mode::FoldedLineStart,
            8 => Mode::LiteralText,
            9 => Mode::FoldedText,
            _ => return None,
        })
    }

    fn in_block_body(self) -> bool {
        self as u8 >= Mode::LiteralLineStart as u8
    }
}

/// Tokenizer for plain, quoted and block scalars of a YAML-like document.
///
/// Quoted scalars are single-line: an unterminated quote ends at the line
/// break. Plain text skips over a balanced `${...}` on the same line, so a
/// `: ` or ` #` inside an expression does not end the scalar.
#[derive(Clone, Debug)]
pub struct ScalarLexer {
    buf: SourceBuffer,
    pos: u32,
    mode: Mode,
    /// Indentation of the current line. Parent indentation inside a block.
    indent: u32,
    /// Content indentation of the current block scalar, once its first
    /// non-blank line is seen.
    content_indent: Option<u32>,
}

impl Default for ScalarLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarLexer {
    pub fn new() -> Self {
        ScalarLexer {
            buf: SourceBuffer::new(""),
            pos: 0,
            mode: Mode::LineStart,
            indent: 0,
            content_indent: None,
        }
    }

    /// Tokenize all of `text` from the initial state.
    pub fn tokenize(text: &str) -> Vec<HostToken> {
        let mut lexer = ScalarLexer::new();
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        lexer.start(text, 0, len, 0);
        std::iter::from_fn(|| lexer.next_token()).collect()
    }

    fn state(&self) -> u16 {
        let indent = self.indent.min(MAX_INDENT) as u16;
        (indent << INDENT_SHIFT) | u16::from(self.mode as u8)
    }

    fn line_start(&mut self) -> Option<(TokenKind, u32)> {
        let mut c = self.buf.cursor_at(self.pos);
        c.eat_while(|b| b == b' ');
        self.indent = c.pos() - self.pos;
        self.mode = Mode::InLine;
        (self.indent > 0).then_some((TokenKind::Indent, c.pos()))
    }

    fn in_line(&mut self) -> (TokenKind, u32) {
        let mut c = self.buf.cursor_at(self.pos);
        let pos = self.pos;
        let byte = c.current();

        if matches!(byte, b'|' | b'>') && after_blank(&c) {
            if let Some(end) = block_header_end(c) {
                self.mode = if byte == b'|' {
                    Mode::AfterLiteralHeader
                } else {
                    Mode::AfterFoldedHeader
                };
                return (TokenKind::BlockHeader, end);
            }
        }

        match byte {
            b'\n' | b'\r' => {
                self.mode = match self.mode {
                    Mode::AfterLiteralHeader => Mode::LiteralLineStart,
                    Mode::AfterFoldedHeader => Mode::FoldedLineStart,
                    _ => Mode::LineStart,
                };
                self.content_indent = None;
                (TokenKind::LineBreak, line_break_end(c))
            }
            b' ' | b'\t' => {
                c.eat_whitespace();
                (TokenKind::Whitespace, c.pos())
            }
            b'#' if after_blank(&c) => {
                c.eat_until_line_end();
                (TokenKind::Comment, c.pos())
            }
            b'"' => {
                self.mode = Mode::InDouble;
                (TokenKind::DoubleQuote, pos + 1)
            }
            b'\'' => {
                self.mode = Mode::InSingle;
                (TokenKind::SingleQuote, pos + 1)
            }
            b':' if is_blank_or_eol(c.peek()) => (TokenKind::Indicator, pos + 1),
            b'-' if is_blank_or_eol(c.peek()) && only_dashes_before(self.buf.as_bytes(), pos) => {
                (TokenKind::Indicator, pos + 1)
            }
            _ => (TokenKind::PlainText, plain_end(c, self.buf.as_bytes())),
        }
    }

    fn in_double(&mut self) -> Option<(TokenKind, u32)> {
        let mut c = self.buf.cursor_at(self.pos);
        match c.current() {
            b'"' => {
                self.mode = Mode::InLine;
                Some((TokenKind::DoubleQuote, c.pos() + 1))
            }
            b'\n' | b'\r' => {
                self.mode = Mode::InLine;
                None
            }
            _ => {
                while c.skip_to_quote_delim(b'"') == b'\\' {
                    c.advance();
                    if !c.is_eof() && !matches!(c.current(), b'\n' | b'\r') {
                        c.advance_char();
                    }
                }
                Some((TokenKind::DoubleQuotedText, c.pos()))
            }
        }
    }

    fn in_single(&mut self) -> Option<(TokenKind, u32)> {
        let mut c = self.buf.cursor_at(self.pos);
        match c.current() {
            b'\'' if c.peek() != b'\'' => {
                self.mode = Mode::InLine;
                Some((TokenKind::SingleQuote, c.pos() + 1))
            }
            b'\n' | b'\r' => {
                self.mode = Mode::InLine;
                None
            }
            _ => {
                loop {
                    match c.skip_to_quote_delim(b'\'') {
                        b'\\' => c.advance(),
                        b'\'' if c.peek() == b'\'' => c.advance_n(2),
                        _ => break,
                    }
                }
                Some((TokenKind::SingleQuotedText, c.pos()))
            }
        }
    }

    fn block_line_start(&mut self) -> Option<(TokenKind, u32)> {
        let mut c = self.buf.cursor_at(self.pos);
        c.eat_while(|b| b == b' ');
        let spaces = c.pos() - self.pos;

        if c.is_eof() || matches!(c.current(), b'\n' | b'\r') {
            if spaces > 0 {
                return Some((TokenKind::Indent, c.pos()));
            }
            return Some((TokenKind::LineBreak, line_break_end(c)));
        }

        let content = match self.content_indent {
            Some(ci) if spaces >= ci => Some(ci),
            None if spaces > self.indent => Some(spaces),
            _ => None,
        };
        match content {
            Some(ci) => {
                self.content_indent = Some(ci);
                self.mode = if self.mode == Mode::LiteralLineStart {
                    Mode::LiteralText
                } else {
                    Mode::FoldedText
                };
                Some((TokenKind::Indent, self.pos + ci))
            }
            None => {
                self.content_indent = None;
                self.mode = Mode::LineStart;
                None
            }
        }
    }

    fn block_text(&mut self) -> (TokenKind, u32) {
        let mut c = self.buf.cursor_at(self.pos);
        c.eat_until_line_end();
        if self.mode == Mode::LiteralText {
            self.mode = Mode::LiteralLineStart;
            (TokenKind::BlockLiteralText, c.pos())
        } else {
            self.mode = Mode::FoldedLineStart;
            (TokenKind::BlockFoldedText, c.pos())
        }
    }
}

impl HostLexer for ScalarLexer {
    fn start(&mut self, text: &str, from: u32, to: u32, state: u16) {
        let end = (to as usize).min(text.len());
        self.buf = SourceBuffer::new(text.get(..end).unwrap_or_default());
        self.pos = from.min(self.buf.len());
        self.mode = Mode::from_bits(state & MODE_MASK).unwrap_or(Mode::LineStart);
        self.indent = u32::from(state >> INDENT_SHIFT);
        self.content_indent = None;
    }

    fn next_token(&mut self) -> Option<HostToken> {
        let state = self.state();
        let start = self.pos;
        loop {
            if self.pos >= self.buf.len() {
                return None;
            }
            let step = match self.mode {
                Mode::LineStart => self.line_start(),
                Mode::InLine | Mode::AfterLiteralHeader | Mode::AfterFoldedHeader => {
                    Some(self.in_line())
                }
                Mode::InDouble => self.in_double(),
                Mode::InSingle => self.in_single(),
                Mode::LiteralLineStart | Mode::FoldedLineStart => self.block_line_start(),
                Mode::LiteralText | Mode::FoldedText => Some(self.block_text()),
            };
            if let Some((kind, end)) = step {
                debug_assert!(end > start, "empty host token at {start}");
                self.pos = end;
                return Some(HostToken {
                    token: Token::new(kind, Span::new(start, end)),
                    state,
                });
            }
        }
    }

    fn is_resumable(state: u16) -> bool {
        let indent_saturated = u32::from(state >> INDENT_SHIFT) >= MAX_INDENT;
        match Mode::from_bits(state & MODE_MASK) {
            Some(mode) => !mode.in_block_body() && !indent_saturated,
            None => false,
        }
    }
}

/// At the start of input, a line, or after a space or tab.
fn after_blank(c: &Cursor<'_>) -> bool {
    c.pos() == 0 || matches!(c.prev(), b' ' | b'\t' | b'\n' | b'\r')
}

fn is_blank_or_eol(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0)
}

/// Only spaces, tabs and sequence dashes precede `pos` on its line.
fn only_dashes_before(bytes: &[u8], pos: u32) -> bool {
    bytes[..pos as usize]
        .iter()
        .rev()
        .take_while(|&&b| !matches!(b, b'\n' | b'\r'))
        .all(|&b| matches!(b, b' ' | b'\t' | b'-'))
}

fn line_break_end(c: Cursor<'_>) -> u32 {
    if c.current() == b'\r' && c.peek() == b'\n' {
        c.pos() + 2
    } else {
        c.pos() + 1
    }
}

/// End of a `|`/`>` header with its chomping and indentation indicators,
/// if nothing but blanks or a comment follows on the line.
fn block_header_end(mut c: Cursor<'_>) -> Option<u32> {
    c.advance();
    c.eat_while(|b| matches!(b, b'+' | b'-' | b'0'..=b'9'));
    let end = c.pos();
    c.eat_whitespace();
    let rest_is_empty = c.is_eof()
        || matches!(c.current(), b'\n' | b'\r')
        || (c.current() == b'#' && c.pos() > end);
    rest_is_empty.then_some(end)
}

/// End of a plain scalar starting at `c`, excluding trailing blanks.
fn plain_end(mut c: Cursor<'_>, bytes: &[u8]) -> u32 {
    let start = c.pos();
    loop {
        match c.skip_to_plain_delim() {
            b':' if is_blank_or_eol(c.peek()) => break,
            b'#' if matches!(c.prev(), b' ' | b'\t') => break,
            b'$' => {
                let at = c.pos() as usize;
                if c.peek() == b'{' && find_expr_start(bytes, at) == Some(at) {
                    let mut line = c;
                    line.eat_until_line_end();
                    let body = bytes.get(at + 2..line.pos() as usize).unwrap_or_default();
                    let mut scan = BraceScan::OPENED;
                    if let Some(close) = scan.scan(body) {
                        c.advance_n(close as u32 + 3);
                        continue;
                    }
                }
                c.advance();
            }
            b':' | b'#' => c.advance(),
            _ => break,
        }
    }

    let mut end = c.pos();
    while end > start && matches!(bytes[end as usize - 1], b' ' | b'\t') {
        end -= 1;
    }
    end
}

#[cfg(test)]
mod tests;
