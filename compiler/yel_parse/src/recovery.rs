//! Token sets and resynchronization after errors.
//!
//! [`TokenSet`] is a `u128` bitset over [`TokenKind`] indices, so
//! membership is one AND. [`synchronize`] skips to the next member of a
//! set without crossing an unmatched closing delimiter.

use yel_ir::TokenKind;

use crate::cursor::Cursor;

const _: () = assert!(
    TokenKind::ALL.len() <= 128,
    "TokenSet uses a u128 bitset; every TokenKind index must be < 128"
);

/// A set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u128);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.index())
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Members in index order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            TokenKind::from_index(idx)
        })
    }

    /// Render for "expected ..." messages: `` `)` ``, `` `,` or `)` ``,
    /// `` `a`, `b`, or `c` ``. Kinds without fixed text are named plainly.
    pub fn format_expected(&self) -> String {
        let names: Vec<String> = self
            .iter()
            .map(|k| match k.lexeme() {
                Some(text) => format!("`{text}`"),
                None => k.display_name().to_owned(),
            })
            .collect();
        match names.as_slice() {
            [] => "nothing".to_owned(),
            [single] => single.clone(),
            [first, second] => format!("{first} or {second}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

/// Tokens that can start a primary expression.
pub const PRIMARY_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::Int)
    .with(TokenKind::Float)
    .with(TokenKind::String)
    .with(TokenKind::UnterminatedString)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::Null)
    .with(TokenKind::LParen)
    .with(TokenKind::LBracket)
    .with(TokenKind::LBrace);

/// Tokens that can start any expression.
pub const EXPR_FIRST: TokenSet = PRIMARY_START
    .with(TokenKind::Minus)
    .with(TokenKind::Bang)
    .with(TokenKind::Not)
    .with(TokenKind::Empty);

/// Separators of a map literal after an entry.
pub const MAP_SEPARATORS: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RBrace);

/// Tokens that open a delimited construct.
pub const OPENERS: TokenSet = TokenSet::new()
    .with(TokenKind::LParen)
    .with(TokenKind::LBracket)
    .with(TokenKind::LBrace);

/// Tokens that close a delimited construct.
pub const CLOSERS: TokenSet = TokenSet::new()
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace);

/// What may follow a complete top-level expression.
pub const EXPR_END: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::Eof);

/// Whether a `:` closing the operand under the cursor lies ahead at nesting
/// depth zero. Each `?` on the way claims a `:` of its own, and the `:` of an
/// `IDENT ':' IDENT '('` prefix belongs to a qualified call. The cursor does
/// not move.
pub fn separator_colon_ahead(cursor: &Cursor<'_>) -> bool {
    let mut depth = 0u32;
    let mut pending = 1u32;
    let mut prev = TokenKind::Eof;
    let mut n = 0;
    loop {
        let kind = cursor.peek_kind_at(n);
        match kind {
            TokenKind::Eof => return false,
            k if OPENERS.contains(k) => depth += 1,
            k if CLOSERS.contains(k) => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ if depth > 0 => {}
            TokenKind::Question => pending += 1,
            TokenKind::Colon => {
                let call_prefix = prev == TokenKind::Ident
                    && cursor.peek_kind_at(n + 1) == TokenKind::Ident
                    && cursor.peek_kind_at(n + 2) == TokenKind::LParen;
                if !call_prefix {
                    pending -= 1;
                    if pending == 0 {
                        return true;
                    }
                }
            }
            TokenKind::Comma | TokenKind::Semicolon | TokenKind::Assign | TokenKind::Arrow => {
                return false;
            }
            _ => {}
        }
        prev = kind;
        n += 1;
    }
}

/// Skip tokens until the cursor is at a member of `stop` at nesting depth
/// zero, at an unmatched closer, or at the end.
///
/// Returns `true` if stopped at a member of `stop`.
pub fn synchronize(cursor: &mut Cursor<'_>, stop: TokenSet) -> bool {
    let mut depth = 0u32;
    while !cursor.is_at_end() {
        let kind = cursor.current_kind();
        if depth == 0 && stop.contains(kind) {
            return true;
        }
        if OPENERS.contains(kind) {
            depth += 1;
        } else if CLOSERS.contains(kind) {
            if depth == 0 {
                return false;
            }
            depth -= 1;
        }
        cursor.advance();
    }
    stop.contains(TokenKind::Eof)
}

#[cfg(test)]
mod tests;
