//! Literal cooking: string unescaping and numeric parsing.
//!
//! Expression strings use one escape rule: `\x` stands for `x`, whatever
//! `x` is. That covers the delimiter (`\'`, `\"`) and `\\`.

use std::borrow::Cow;

/// Contents of a string literal token, without its quotes and with
/// escapes resolved. An unterminated literal has no closing quote to strip.
pub fn unescape_string(literal: &str) -> Cow<'_, str> {
    let mut chars = literal.chars();
    let Some(quote) = chars.next() else {
        return Cow::Borrowed("");
    };
    let body = &literal[quote.len_utf8()..];
    let body = match body.strip_suffix(quote) {
        // a trailing `\'` is an escaped quote, not the terminator
        Some(inner) if !ends_with_odd_backslashes(inner) => inner,
        _ => body,
    };

    if !body.contains('\\') {
        return Cow::Borrowed(body);
    }

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn ends_with_odd_backslashes(text: &str) -> bool {
    text.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Parse a decimal integer literal. `None` on overflow.
pub fn parse_int(text: &str) -> Option<u64> {
    text.parse::<u64>().ok()
}

/// Parse a float literal (`1.5`, `1e3`, `.5`). `None` if malformed or
/// not finite.
pub fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests;
