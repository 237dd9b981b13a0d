//! Brace and quote tracking inside `${...}`.
//!
//! Shared by the boundary splitter and the reference host tokenizer so both
//! agree on where an expression closes.

/// Running scan state of one open expression.
///
/// Depth is a plain `u32` here; it is clamped only when packed into a
/// [`ScanState`](crate::ScanState).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BraceScan {
    pub depth: u32,
    pub in_single_quote: bool,
    pub in_double_quote: bool,
}

impl BraceScan {
    /// State right after `${`.
    pub const OPENED: BraceScan = BraceScan {
        depth: 1,
        in_single_quote: false,
        in_double_quote: false,
    };

    #[inline]
    fn quoted(&self) -> bool {
        self.in_single_quote || self.in_double_quote
    }

    /// Scan `bytes` and return the index of the `}` that brings depth to 0.
    ///
    /// Inside a quote a backslash skips the following byte. Quote state and
    /// depth carry across calls when no close is found.
    pub fn scan(&mut self, bytes: &[u8]) -> Option<usize> {
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' if self.quoted() => {
                    i += 2;
                    continue;
                }
                b'\'' if !self.in_double_quote => self.in_single_quote = !self.in_single_quote,
                b'"' if !self.in_single_quote => self.in_double_quote = !self.in_double_quote,
                b'{' if !self.quoted() => self.depth += 1,
                b'}' if !self.quoted() => {
                    self.depth = self.depth.saturating_sub(1);
                    if self.depth == 0 {
                        return Some(i);
                    }
                }
                _ => {}
            }
            i += 1;
        }
        None
    }
}

/// Index of the next unescaped `${` in `bytes`, searching from `from`.
///
/// A `${` is escaped when an odd number of consecutive backslashes precede
/// the `$` within `bytes`.
pub fn find_expr_start(bytes: &[u8], from: usize) -> Option<usize> {
    let mut at = from;
    while let Some(off) = bytes
        .get(at..)
        .and_then(|rest| rest.iter().position(|&b| b == b'$'))
    {
        let i = at + off;
        if bytes.get(i + 1) == Some(&b'{') && !is_escaped(bytes, i) {
            return Some(i);
        }
        at = i + 1;
    }
    None
}

fn is_escaped(bytes: &[u8], i: usize) -> bool {
    bytes[..i].iter().rev().take_while(|&&b| b == b'\\').count() % 2 == 1
}
