//! Parser tests.
//!
//! - `parser`: bare expression bodies: precedence, literals, recovery
//! - `document`: expressions located in host documents, raw spans,
//!   unclosed detection, multi-line bodies
