//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content so
//! scanners detect the end of input by byte value. The total size is rounded
//! up to the next 64-byte boundary, which also keeps `peek()` and `peek2()`
//! in bounds near the end.

use crate::Cursor;

const CACHE_LINE: usize = 64;

/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned copy of the source text, for `&str` slicing.
    text: String,
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded, sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes saturate `len()`; callers are
    /// expected to reject such inputs upstream.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let padded_len = (bytes.len() + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..bytes.len()].copy_from_slice(bytes);

        SourceBuffer {
            text: source.to_owned(),
            buf,
            source_len: u32::try_from(bytes.len()).unwrap_or(u32::MAX),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// A [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text, &self.buf, self.source_len, 0)
    }

    /// A [`Cursor`] positioned at `pos`, clamped to the source length.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::new(&self.text, &self.buf, self.source_len, pos.min(self.source_len))
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
