use super::*;

#[test]
fn plain_string_is_borrowed() {
    assert!(matches!(unescape_string("'abc'"), Cow::Borrowed("abc")));
    assert_eq!(unescape_string("\"abc\""), "abc");
}

#[test]
fn escapes_resolve_to_the_escaped_char() {
    assert_eq!(unescape_string(r"'it\'s'"), "it's");
    assert_eq!(unescape_string(r#""a\"b""#), "a\"b");
    assert_eq!(unescape_string(r"'a\\b'"), r"a\b");
    assert_eq!(unescape_string(r"'\n'"), "n");
}

#[test]
fn escaped_backslash_before_closing_quote() {
    assert_eq!(unescape_string(r"'a\\'"), r"a\");
}

#[test]
fn unterminated_keeps_all_content() {
    assert_eq!(unescape_string("'abc"), "abc");
    assert_eq!(unescape_string(r"'abc\'"), "abc'");
    assert_eq!(unescape_string("'"), "");
    assert_eq!(unescape_string(""), "");
}

#[test]
fn other_quote_is_content() {
    assert_eq!(unescape_string(r#"'say "hi"'"#), r#"say "hi""#);
}

#[test]
fn numbers() {
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("18446744073709551615"), Some(u64::MAX));
    assert_eq!(parse_int("18446744073709551616"), None);
    assert_eq!(parse_float("1.5"), Some(1.5));
    assert_eq!(parse_float(".5"), Some(0.5));
    assert_eq!(parse_float("1e3"), Some(1000.0));
    assert_eq!(parse_float("1.5E-3"), Some(0.0015));
    assert_eq!(parse_float("1e999"), None);
}
