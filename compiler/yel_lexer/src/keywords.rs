//! Keyword resolution for the cooking layer.
//!
//! Keywords are resolved only after the raw scanner has consumed the
//! longest identifier-shaped run, so `trueValue` is one identifier and
//! never `true` followed by `Value`.
//!
//! The lookup uses the identifier's length as a first-pass filter
//! (keywords are 2-5 or 10 chars), then matches the spellings of that
//! length.

use yel_ir::TokenKind;

/// Keyword kind for `text`, or `None` for an ordinary identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    if !matches!(bytes.len(), 2..=5 | 10) || !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match bytes.len() {
        2 => match text {
            "or" => Some(TokenKind::Or),
            "eq" => Some(TokenKind::Eq),
            "ne" => Some(TokenKind::Ne),
            "lt" => Some(TokenKind::Lt),
            "gt" => Some(TokenKind::Gt),
            "le" => Some(TokenKind::Le),
            "ge" => Some(TokenKind::Ge),
            _ => None,
        },
        3 => match text {
            "not" => Some(TokenKind::Not),
            "and" => Some(TokenKind::And),
            "div" => Some(TokenKind::Div),
            "mod" => Some(TokenKind::Mod),
            _ => None,
        },
        4 => match text {
            "true" => Some(TokenKind::True),
            "null" => Some(TokenKind::Null),
            _ => None,
        },
        5 => match text {
            "false" => Some(TokenKind::False),
            "empty" => Some(TokenKind::Empty),
            _ => None,
        },
        10 => (text == "instanceof").then_some(TokenKind::Instanceof),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
