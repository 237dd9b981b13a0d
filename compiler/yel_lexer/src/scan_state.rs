//! Resumable splitter state.
//!
//! [`ScanState`] is an explicit struct everywhere inside the pipeline. It is
//! packed into a single `u32` only at the incremental re-lexing boundary,
//! where an editor stores one integer per token.
//!
//! # Packed layout
//!
//! | Bits  | Field                 |
//! |-------|-----------------------|
//! | 0-15  | host tokenizer state  |
//! | 16    | in continuation       |
//! | 17-20 | brace depth (0-15)    |
//! | 21    | in single quote       |
//! | 22    | in double quote       |
//! | 23    | mid-segment emission  |
//! | 24-31 | reserved, must be 0   |

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    struct PackedFlags: u32 {
        const IN_CONTINUATION = 1 << 16;
        const IN_SINGLE_QUOTE = 1 << 21;
        const IN_DOUBLE_QUOTE = 1 << 22;
        const MID_SEGMENT = 1 << 23;
    }
}

const HOST_MASK: u32 = 0xFFFF;
const DEPTH_SHIFT: u32 = 17;
const DEPTH_MASK: u32 = 0xF << DEPTH_SHIFT;
const RESERVED_MASK: u32 = 0xFF00_0000;

/// A packed state that does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("scan state {0:#010x} has reserved bits set")]
    ReservedBits(u32),
}

/// Splitter state at a token boundary.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ScanState {
    /// Opaque state of the underlying host tokenizer.
    pub host_state: u16,
    /// An expression left open by a previous host token is still open.
    pub in_continuation: bool,
    /// Open `{` count of the current expression, saturating at
    /// [`MAX_BRACE_DEPTH`](Self::MAX_BRACE_DEPTH).
    pub brace_depth: u8,
    pub in_single_quote: bool,
    pub in_double_quote: bool,
    /// Inside the sub-tokens of one split host token, past the first.
    pub mid_segment: bool,
}

impl ScanState {
    /// The state at the beginning of a document.
    pub const INITIAL: ScanState = ScanState {
        host_state: 0,
        in_continuation: false,
        brace_depth: 0,
        in_single_quote: false,
        in_double_quote: false,
        mid_segment: false,
    };

    pub const MAX_BRACE_DEPTH: u8 = 15;

    /// Clamp a running depth to the 4-bit field.
    pub fn clamp_depth(depth: u32) -> u8 {
        depth.min(u32::from(Self::MAX_BRACE_DEPTH)) as u8
    }

    pub fn to_u32(self) -> u32 {
        let mut flags = PackedFlags::empty();
        flags.set(PackedFlags::IN_CONTINUATION, self.in_continuation);
        flags.set(PackedFlags::IN_SINGLE_QUOTE, self.in_single_quote);
        flags.set(PackedFlags::IN_DOUBLE_QUOTE, self.in_double_quote);
        flags.set(PackedFlags::MID_SEGMENT, self.mid_segment);

        let depth = u32::from(self.brace_depth.min(Self::MAX_BRACE_DEPTH)) << DEPTH_SHIFT;
        u32::from(self.host_state) | depth | flags.bits()
    }

    pub fn from_u32(packed: u32) -> Result<Self, StateError> {
        if packed & RESERVED_MASK != 0 {
            return Err(StateError::ReservedBits(packed));
        }
        let flags = PackedFlags::from_bits_truncate(packed);
        Ok(ScanState {
            host_state: (packed & HOST_MASK) as u16,
            in_continuation: flags.contains(PackedFlags::IN_CONTINUATION),
            brace_depth: ((packed & DEPTH_MASK) >> DEPTH_SHIFT) as u8,
            in_single_quote: flags.contains(PackedFlags::IN_SINGLE_QUOTE),
            in_double_quote: flags.contains(PackedFlags::IN_DOUBLE_QUOTE),
            mid_segment: flags.contains(PackedFlags::MID_SEGMENT),
        })
    }
}

impl From<ScanState> for u32 {
    fn from(state: ScanState) -> u32 {
        state.to_u32()
    }
}

impl TryFrom<u32> for ScanState {
    type Error = StateError;

    fn try_from(packed: u32) -> Result<Self, StateError> {
        ScanState::from_u32(packed)
    }
}

#[cfg(test)]
mod tests;
