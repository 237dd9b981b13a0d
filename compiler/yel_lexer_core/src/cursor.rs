//! Cursor over a sentinel-terminated buffer.
//!
//! EOF is the position reaching the source length; the byte there is
//! always the `0x00` sentinel, so byte-class loops stop without a bounds
//! check. An interior `0x00` at `pos < source_len` is ordinary content.

/// Earliest of two optional `memchr` hits.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte cursor created by [`SourceBuffer::cursor`](crate::SourceBuffer::cursor).
///
/// `Copy`, so saving and restoring a scan position is a plain assignment.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Source bytes followed by the sentinel and zero padding.
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str, buf: &'a [u8], source_len: u32, pos: u32) -> Self {
        debug_assert!((source_len as usize) < buf.len(), "sentinel out of bounds");
        Cursor {
            text,
            buf,
            pos,
            source_len,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    /// Byte immediately before the current position, `0x00` at offset 0.
    #[inline]
    pub fn prev(&self) -> u8 {
        if self.pos == 0 {
            0
        } else {
            self.buf[self.pos as usize - 1]
        }
    }

    /// Byte at an absolute offset, `0x00` past the end of the buffer.
    #[inline]
    pub fn byte_at(&self, offset: u32) -> u8 {
        self.buf.get(offset as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Byte width of the UTF-8 character whose leading byte is `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character, never past EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text in `start..end`, or `""` if the range is not a valid
    /// character-boundary slice of the source.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.text
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Advance while `pred` holds. `pred(0)` must be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past spaces and tabs.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    pub fn eat_until_line_end(&mut self) {
        let remaining = self.remaining();
        match memchr::memchr2(b'\n', b'\r', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past ordinary quoted content to the next `quote`, `\`, or
    /// line end. Returns the byte found, or `0` at EOF.
    pub fn skip_to_quote_delim(&mut self, quote: u8) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(quote, b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        self.jump_to(earliest_of(primary, cr))
    }

    /// Advance past ordinary plain-scalar content to the next byte that
    /// may end it: `:`, `#`, `$`, `\n`, or `\r`. Returns the byte found,
    /// or `0` at EOF.
    pub fn skip_to_plain_delim(&mut self) -> u8 {
        let remaining = self.remaining();
        let primary = memchr::memchr3(b':', b'#', b'$', remaining);
        let line = memchr::memchr2(b'\n', b'\r', remaining);
        self.jump_to(earliest_of(primary, line))
    }

    /// Advance past expression-string content to the next `quote` or `\`.
    /// Returns the byte found, or `0` at EOF.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let remaining = self.remaining();
        self.jump_to(memchr::memchr2(quote, b'\\', remaining))
    }

    fn remaining(&self) -> &'a [u8] {
        let start = (self.pos as usize).min(self.source_len as usize);
        &self.buf[start..self.source_len as usize]
    }

    fn jump_to(&mut self, offset: Option<usize>) -> u8 {
        if let Some(off) = offset {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 40);
