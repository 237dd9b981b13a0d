use super::*;

#[test]
fn every_keyword_resolves() {
    let all = [
        ("true", TokenKind::True),
        ("false", TokenKind::False),
        ("null", TokenKind::Null),
        ("empty", TokenKind::Empty),
        ("not", TokenKind::Not),
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("div", TokenKind::Div),
        ("mod", TokenKind::Mod),
        ("eq", TokenKind::Eq),
        ("ne", TokenKind::Ne),
        ("lt", TokenKind::Lt),
        ("gt", TokenKind::Gt),
        ("le", TokenKind::Le),
        ("ge", TokenKind::Ge),
        ("instanceof", TokenKind::Instanceof),
    ];
    for (text, kind) in all {
        assert_eq!(lookup(text), Some(kind), "{text}");
        assert_eq!(kind.lexeme(), Some(text));
    }
}

#[test]
fn prefixed_and_suffixed_words_are_identifiers() {
    for text in ["trueValue", "nullable", "orDefault", "notes", "equal", "modulo", "instanceofs"] {
        assert_eq!(lookup(text), None, "{text}");
    }
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(lookup("True"), None);
    assert_eq!(lookup("NULL"), None);
    assert_eq!(lookup("And"), None);
}

#[test]
fn out_of_range_lengths() {
    assert_eq!(lookup("a"), None);
    assert_eq!(lookup("abcdef"), None);
    assert_eq!(lookup(""), None);
}
