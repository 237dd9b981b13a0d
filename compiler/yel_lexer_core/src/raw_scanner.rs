//! Hand-written raw scanner producing `(RawTag, len)` pairs for
//! expression text.
//!
//! The scanner does not resolve keywords or interpret escapes; those are
//! left to the cooking layer. Every byte of input is covered by exactly one
//! token, and an unrecognized character becomes a single
//! [`RawTag::InvalidByte`] token instead of stopping the scan.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! Multi-character operators are tried before their single-character
//! prefixes.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner over one expression text.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        RawScanner { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` once the source is exhausted,
    /// and keeps returning it on later calls.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 if self.cursor.is_eof() => RawToken {
                tag: RawTag::Eof,
                len: 0,
            },
            b' ' | b'\t' | b'\n' | b'\r' => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'#' | b'$' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'.' => self.dot(start),
            b'\'' | b'"' => self.string(start),
            b'+' => self.pair(start, b'=', RawTag::PlusEqual, RawTag::Plus),
            b'-' => self.pair(start, b'>', RawTag::Arrow, RawTag::Minus),
            b'=' => self.pair(start, b'=', RawTag::EqualEqual, RawTag::Equal),
            b'!' => self.pair(start, b'=', RawTag::NotEqual, RawTag::Bang),
            b'<' => self.pair(start, b'=', RawTag::LessEqual, RawTag::Less),
            b'>' => self.pair(start, b'=', RawTag::GreaterEqual, RawTag::Greater),
            b'&' => self.pair(start, b'&', RawTag::AmpersandAmpersand, RawTag::InvalidByte),
            b'|' => self.pair(start, b'|', RawTag::PipePipe, RawTag::InvalidByte),
            b'*' => self.single(start, RawTag::Star),
            b'/' => self.single(start, RawTag::Slash),
            b'%' => self.single(start, RawTag::Percent),
            b'?' => self.single(start, RawTag::Question),
            b':' => self.single(start, RawTag::Colon),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            _ => self.invalid(start),
        }
    }

    #[inline]
    fn token(&self, tag: RawTag, start: u32) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Trivia ─────────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\r'));
        self.token(RawTag::Whitespace, start)
    }

    // ─── Identifiers ────────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.token(RawTag::Ident, start)
    }

    // ─── Operators ──────────────────────────────────────────────────

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(tag, start)
    }

    /// `first second` becomes `double`, a lone `first` becomes `single`.
    fn pair(&mut self, start: u32, second: u8, double: RawTag, single: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.token(double, start)
        } else {
            self.token(single, start)
        }
    }

    fn dot(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if self.cursor.current().is_ascii_digit() {
            self.eat_digits();
            self.eat_exponent();
            self.token(RawTag::Float, start)
        } else {
            self.token(RawTag::Dot, start)
        }
    }

    // ─── Numeric Literals ───────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        self.eat_digits();

        // `1.5` is a float; `1.` and `1.x` leave the dot for member access
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_digits();
            self.eat_exponent();
            return self.token(RawTag::Float, start);
        }

        if self.eat_exponent() {
            return self.token(RawTag::Float, start);
        }
        self.token(RawTag::Int, start)
    }

    fn eat_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
    }

    /// Consume `[eE][+-]?[0-9]+` if present in full. Returns whether it was.
    fn eat_exponent(&mut self) -> bool {
        if !matches!(self.cursor.current(), b'e' | b'E') {
            return false;
        }
        let sign = matches!(self.cursor.peek(), b'+' | b'-');
        let first_digit = if sign {
            self.cursor.peek2()
        } else {
            self.cursor.peek()
        };
        if !first_digit.is_ascii_digit() {
            return false;
        }
        self.cursor.advance_n(if sign { 2 } else { 1 });
        self.eat_digits();
        true
    }

    // ─── String Literals ────────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        let quote = self.cursor.current();
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                0 => return self.token(RawTag::UnterminatedString, start),
                _ => {
                    self.cursor.advance();
                    return self.token(RawTag::String, start);
                }
            }
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────

    fn invalid(&mut self, start: u32) -> RawToken {
        if self.cursor.current() < 0x80 {
            self.cursor.advance();
        } else {
            self.cursor.advance_char();
        }
        self.token(RawTag::InvalidByte, start)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        (tok.tag != RawTag::Eof).then_some(tok)
    }
}

static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(i as u8, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_');
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Tokenize `source` and collect every raw token except the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
mod tests;
