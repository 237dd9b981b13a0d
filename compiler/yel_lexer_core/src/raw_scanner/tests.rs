use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::SourceBuffer;

fn scan(source: &str) -> Vec<RawToken> {
    tokenize(source)
}

fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Tag and text of each non-trivia token.
fn scan_texts(source: &str) -> Vec<(RawTag, &str)> {
    let mut pos = 0usize;
    let mut out = Vec::new();
    for tok in scan(source) {
        let end = pos + tok.len as usize;
        if tok.tag != RawTag::Whitespace {
            out.push((tok.tag, &source[pos..end]));
        }
        pos = end;
    }
    out
}

// ─── Property Tests ────────────────────────────────────────────

proptest! {
    #[test]
    fn total_len_equals_source_len(source in "\\PC{0,64}") {
        let total: u32 = scan(&source).iter().map(|t| t.len).sum();
        prop_assert_eq!(total as usize, source.len());
    }

    #[test]
    fn every_token_has_positive_length(source in "[ -~\\n\\t]{0,64}") {
        for tok in scan(&source) {
            prop_assert!(tok.len > 0, "{:?}", tok);
        }
    }
}

#[test]
fn eof_is_sticky() {
    let buf = SourceBuffer::new("a");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Ident);
    for _ in 0..3 {
        let tok = scanner.next_token();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.len, 0);
    }
}

#[test]
fn all_256_bytes_produce_tokens() {
    for b in 0u8..=127 {
        let source = String::from(b as char);
        let total: u32 = scan(&source).iter().map(|t| t.len).sum();
        assert_eq!(total, 1, "byte {b:#04x}");
    }
}

// ─── Identifiers ───────────────────────────────────────────────

#[test]
fn identifier_shapes() {
    assert_eq!(
        scan_texts("abc _x #root $var a1_b2"),
        vec![
            (RawTag::Ident, "abc"),
            (RawTag::Ident, "_x"),
            (RawTag::Ident, "#root"),
            (RawTag::Ident, "$var"),
            (RawTag::Ident, "a1_b2"),
        ]
    );
}

#[test]
fn identifier_is_maximal() {
    assert_eq!(scan_texts("trueValue"), vec![(RawTag::Ident, "trueValue")]);
    assert_eq!(scan_texts("orDefault"), vec![(RawTag::Ident, "orDefault")]);
}

#[test]
fn hash_and_dollar_do_not_continue() {
    assert_eq!(
        scan_texts("a#b"),
        vec![(RawTag::Ident, "a"), (RawTag::Ident, "#b")]
    );
}

// ─── Numbers ───────────────────────────────────────────────────

#[test]
fn integer_and_float_shapes() {
    assert_eq!(
        scan_texts("42 1.5 1e3 1.5E-3 .5 2e+10"),
        vec![
            (RawTag::Int, "42"),
            (RawTag::Float, "1.5"),
            (RawTag::Float, "1e3"),
            (RawTag::Float, "1.5E-3"),
            (RawTag::Float, ".5"),
            (RawTag::Float, "2e+10"),
        ]
    );
}

#[test]
fn trailing_dot_is_member_access() {
    assert_eq!(
        scan_texts("1.foo"),
        vec![(RawTag::Int, "1"), (RawTag::Dot, "."), (RawTag::Ident, "foo")]
    );
    assert_eq!(scan_texts("1."), vec![(RawTag::Int, "1"), (RawTag::Dot, ".")]);
}

#[test]
fn incomplete_exponent_is_not_consumed() {
    assert_eq!(
        scan_texts("1e"),
        vec![(RawTag::Int, "1"), (RawTag::Ident, "e")]
    );
    assert_eq!(
        scan_texts("1e+"),
        vec![(RawTag::Int, "1"), (RawTag::Ident, "e"), (RawTag::Plus, "+")]
    );
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn strings_with_either_quote() {
    assert_eq!(
        scan_texts(r#"'a' "b""#),
        vec![(RawTag::String, "'a'"), (RawTag::String, "\"b\"")]
    );
}

#[test]
fn escaped_delimiter_stays_inside() {
    assert_eq!(scan_texts(r"'it\'s'"), vec![(RawTag::String, r"'it\'s'")]);
    assert_eq!(scan_texts(r#""a\\""#), vec![(RawTag::String, r#""a\\""#)]);
}

#[test]
fn other_quote_is_content() {
    assert_eq!(scan_texts(r#"'say "hi"'"#), vec![(RawTag::String, r#"'say "hi"'"#)]);
}

#[test]
fn unterminated_string_runs_to_end() {
    assert_eq!(
        scan_texts("'abc"),
        vec![(RawTag::UnterminatedString, "'abc")]
    );
    assert_eq!(
        scan_texts("'abc\\"),
        vec![(RawTag::UnterminatedString, "'abc\\")]
    );
}

// ─── Operators ─────────────────────────────────────────────────

#[test]
fn multi_char_operators_are_greedy() {
    assert_eq!(
        scan_tags("==!=<=>=&&||+=->"),
        vec![
            RawTag::EqualEqual,
            RawTag::NotEqual,
            RawTag::LessEqual,
            RawTag::GreaterEqual,
            RawTag::AmpersandAmpersand,
            RawTag::PipePipe,
            RawTag::PlusEqual,
            RawTag::Arrow,
        ]
    );
}

#[test]
fn single_char_fallbacks() {
    assert_eq!(
        scan_tags("+-*/%!<>?=:.,;()[]{}"),
        vec![
            RawTag::Plus,
            RawTag::Minus,
            RawTag::Star,
            RawTag::Slash,
            RawTag::Percent,
            RawTag::Bang,
            RawTag::Less,
            RawTag::Greater,
            RawTag::Question,
            RawTag::Equal,
            RawTag::Colon,
            RawTag::Dot,
            RawTag::Comma,
            RawTag::Semicolon,
            RawTag::LeftParen,
            RawTag::RightParen,
            RawTag::LeftBracket,
            RawTag::RightBracket,
            RawTag::LeftBrace,
            RawTag::RightBrace,
        ]
    );
}

#[test]
fn triple_equals_is_eqeq_then_eq() {
    assert_eq!(scan_tags("==="), vec![RawTag::EqualEqual, RawTag::Equal]);
}

// ─── Errors ────────────────────────────────────────────────────

#[test]
fn lone_ampersand_and_pipe_are_invalid() {
    assert_eq!(scan_tags("&"), vec![RawTag::InvalidByte]);
    assert_eq!(scan_tags("|"), vec![RawTag::InvalidByte]);
}

#[test]
fn invalid_character_is_one_token_and_scan_continues() {
    assert_eq!(
        scan_texts("a @ b"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::InvalidByte, "@"),
            (RawTag::Ident, "b"),
        ]
    );
    assert_eq!(scan_texts("é"), vec![(RawTag::InvalidByte, "é")]);
}

#[test]
fn whitespace_run_includes_newlines() {
    let toks = scan("a \n\t b");
    assert_eq!(toks.len(), 3);
    assert_eq!(toks[1].tag, RawTag::Whitespace);
    assert_eq!(toks[1].len, 4);
}
