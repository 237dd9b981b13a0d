//! Standalone scanning primitives for the Yel expression language.
//!
//! This crate has no `yel_*` dependencies so external tools can scan
//! expression text without the parser:
//!
//! - [`SourceBuffer`] / [`Cursor`]: sentinel-terminated byte scanning
//! - [`RawScanner`]: expression tokens as `(RawTag, len)` pairs
//! - [`decode`]: host escape normalization with an [`OffsetMap`] back to
//!   raw coordinates

mod cursor;
mod escape;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use escape::{decode, Decoded, OffsetMap};
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
