//! Position-preserving escape decoding for double-quoted hosts.
//!
//! Only the two host escapes that would confuse quote and brace tracking
//! are normalized: `\\` becomes `\` and `\"` becomes `"`. Every other
//! `\x` pair is copied through verbatim so the expression lexer sees the
//! escapes it defines itself. A lone trailing `\` is copied as-is.
//!
//! The returned [`OffsetMap`] translates each decoded byte back to the raw
//! buffer, with a final sentinel entry equal to the raw end offset.

/// `decoded index -> raw offset`, monotonically non-decreasing.
///
/// Holds one entry per decoded byte plus one end sentinel, so
/// `entries.len() == text.len() + 1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OffsetMap {
    entries: Vec<u32>,
}

impl OffsetMap {
    /// Raw offset of decoded byte `index`. Indices past the end map to the
    /// sentinel.
    #[inline]
    pub fn to_raw(&self, index: u32) -> u32 {
        let i = (index as usize).min(self.entries.len().saturating_sub(1));
        self.entries.get(i).copied().unwrap_or(0)
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    /// Number of decoded bytes (excludes the sentinel).
    pub fn len(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decoded text plus its map back to raw coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub map: OffsetMap,
}

/// Decode `raw[start..end]`, where offsets are absolute positions in the
/// raw buffer.
///
/// Cannot fail: an out-of-range or non-boundary window decodes as empty,
/// and malformed escapes pass through for the expression lexer to report.
pub fn decode(raw: &str, start: u32, end: u32) -> Decoded {
    let Some(window) = raw.get(start as usize..end as usize) else {
        return Decoded {
            text: String::new(),
            map: OffsetMap { entries: vec![end] },
        };
    };

    let mut text = String::with_capacity(window.len());
    let mut entries = Vec::with_capacity(window.len() + 1);
    let mut chars = window.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let at = start + i as u32;
        if c == '\\' {
            match chars.peek().copied() {
                Some((_, next @ ('\\' | '"'))) => {
                    chars.next();
                    text.push(next);
                    entries.push(at);
                }
                Some((j, next)) => {
                    chars.next();
                    text.push('\\');
                    entries.push(at);
                    push_char(&mut text, &mut entries, next, start + j as u32);
                }
                None => {
                    text.push('\\');
                    entries.push(at);
                }
            }
        } else {
            push_char(&mut text, &mut entries, c, at);
        }
    }

    entries.push(end);
    Decoded {
        text,
        map: OffsetMap { entries },
    }
}

/// Append `c` with one map entry per UTF-8 byte.
fn push_char(text: &mut String, entries: &mut Vec<u32>, c: char, at: u32) {
    text.push(c);
    entries.extend((0..c.len_utf8() as u32).map(|k| at + k));
}
