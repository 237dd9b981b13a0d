//! Parser snapshots for speculative parsing.
//!
//! Prefer plain token checks for one or two tokens of lookahead. For a
//! longer pattern, [`Parser::try_parse`] attempts it and keeps the result
//! only when it matches in full.
//!
//! A snapshot records the arena and diagnostic lengths as well as the
//! cursor, so a restored parser has no trace of the abandoned attempt.

use crate::context::ParseContext;
use crate::Parser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
    pub(crate) arena_len: usize,
    pub(crate) diagnostics_len: usize,
    pub(crate) context: ParseContext,
}

impl Parser<'_> {
    pub(crate) fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot {
            cursor_pos: self.cursor.position(),
            arena_len: self.arena.len(),
            diagnostics_len: self.diagnostics.len(),
            context: self.context,
        }
    }

    pub(crate) fn restore(&mut self, snapshot: ParserSnapshot) {
        self.cursor.set_position(snapshot.cursor_pos);
        self.arena.truncate(snapshot.arena_len);
        self.diagnostics.truncate(snapshot.diagnostics_len);
        self.context = snapshot.context;
    }

    /// Run `f`, keeping its effects only if it returns `Some`.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let result = f(self);
        if result.is_none() {
            self.restore(snapshot);
        }
        result
    }
}

#[cfg(test)]
mod tests;
