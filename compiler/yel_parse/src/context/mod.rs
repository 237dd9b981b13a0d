//! Context flags for context-sensitive parsing.
//!
//! A bare `:` means three different things: the qualified-call separator
//! in `ns:name(...)`, the ternary's else separator and the map-entry
//! separator. Where one of the latter two is pending, a qualified call must
//! leave that separator in place for `{a: f(1)}` to stay a map.

/// Context flags for parsing. Flags combine with [`with`](Self::with).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u8);

impl ParseContext {
    pub const NONE: Self = Self(0);

    /// A `:` closes the current operand (ternary then-branch, map key).
    pub const COLON_IS_SEPARATOR: Self = Self(1 << 0);

    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }
}

#[cfg(test)]
mod tests;
