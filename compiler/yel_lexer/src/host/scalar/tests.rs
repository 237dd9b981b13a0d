use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn lex(text: &str) -> Vec<(TokenKind, &str)> {
    ScalarLexer::tokenize(text)
        .into_iter()
        .map(|t| (t.token.kind, t.token.text(text)))
        .collect()
}

#[test]
fn mapping_line() {
    use TokenKind::*;
    assert_eq!(
        lex("key: value # note\n"),
        vec![
            (PlainText, "key"),
            (Indicator, ":"),
            (Whitespace, " "),
            (PlainText, "value"),
            (Whitespace, " "),
            (Comment, "# note"),
            (LineBreak, "\n"),
        ]
    );
}

#[test]
fn indentation_and_sequences() {
    use TokenKind::*;
    assert_eq!(
        lex("a:\n  - x\n"),
        vec![
            (PlainText, "a"),
            (Indicator, ":"),
            (LineBreak, "\n"),
            (Indent, "  "),
            (Indicator, "-"),
            (Whitespace, " "),
            (PlainText, "x"),
            (LineBreak, "\n"),
        ]
    );
    assert_eq!(lex("-5"), vec![(PlainText, "-5")]);
}

#[test]
fn plain_scalar_keeps_inner_colons_and_hashes() {
    use TokenKind::*;
    assert_eq!(lex("url: a:b#c"), vec![
        (PlainText, "url"),
        (Indicator, ":"),
        (Whitespace, " "),
        (PlainText, "a:b#c"),
    ]);
}

#[test]
fn plain_scalar_skips_balanced_expression() {
    use TokenKind::*;
    assert_eq!(
        lex("v: ${ {a: 1} # x}"),
        vec![
            (PlainText, "v"),
            (Indicator, ":"),
            (Whitespace, " "),
            (PlainText, "${ {a: 1} # x}"),
        ]
    );
    // unclosed on this line: ordinary plain scanning resumes
    assert_eq!(
        lex("${a: b"),
        vec![
            (PlainText, "${a"),
            (Indicator, ":"),
            (Whitespace, " "),
            (PlainText, "b"),
        ]
    );
}

#[test]
fn quoted_scalars() {
    use TokenKind::*;
    assert_eq!(
        lex(r#""a \" b" 'it''s'"#),
        vec![
            (DoubleQuote, "\""),
            (DoubleQuotedText, r#"a \" b"#),
            (DoubleQuote, "\""),
            (Whitespace, " "),
            (SingleQuote, "'"),
            (SingleQuotedText, "it''s"),
            (SingleQuote, "'"),
        ]
    );
    assert_eq!(
        lex("\"\""),
        vec![(DoubleQuote, "\""), (DoubleQuote, "\"")]
    );
}

#[test]
fn unterminated_quote_ends_at_line_break() {
    use TokenKind::*;
    assert_eq!(
        lex("\"abc\nx"),
        vec![
            (DoubleQuote, "\""),
            (DoubleQuotedText, "abc"),
            (LineBreak, "\n"),
            (PlainText, "x"),
        ]
    );
}

#[test]
fn block_literal_body() {
    use TokenKind::*;
    assert_eq!(
        lex("s: |-\n  one\n\n    two\nk: v"),
        vec![
            (PlainText, "s"),
            (Indicator, ":"),
            (Whitespace, " "),
            (BlockHeader, "|-"),
            (LineBreak, "\n"),
            (Indent, "  "),
            (BlockLiteralText, "one"),
            (LineBreak, "\n"),
            (LineBreak, "\n"),
            (Indent, "  "),
            (BlockLiteralText, "  two"),
            (LineBreak, "\n"),
            (PlainText, "k"),
            (Indicator, ":"),
            (Whitespace, " "),
            (PlainText, "v"),
        ]
    );
}

#[test]
fn block_folded_body() {
    use TokenKind::*;
    assert_eq!(
        lex("> # c\n a"),
        vec![
            (BlockHeader, ">"),
            (Whitespace, " "),
            (Comment, "# c"),
            (LineBreak, "\n"),
            (Indent, " "),
            (BlockFoldedText, "a"),
        ]
    );
}

#[test]
fn pipe_inside_plain_text_is_not_a_header() {
    use TokenKind::*;
    assert_eq!(lex("a | b"), vec![(PlainText, "a | b")]);
    assert_eq!(
        lex("x: |x"),
        vec![
            (PlainText, "x"),
            (Indicator, ":"),
            (Whitespace, " "),
            (PlainText, "|x"),
        ]
    );
}

#[test]
fn crlf_is_one_line_break() {
    use TokenKind::*;
    assert_eq!(
        lex("a\r\nb"),
        vec![(PlainText, "a"), (LineBreak, "\r\n"), (PlainText, "b")]
    );
}

#[test]
fn block_body_states_are_not_resumable() {
    let text = "s: |\n  body\n";
    let tokens = ScalarLexer::tokenize(text);
    let body = tokens
        .iter()
        .find(|t| t.token.kind == TokenKind::BlockLiteralText)
        .map(|t| t.state);
    assert_eq!(body.map(ScalarLexer::is_resumable), Some(false));
    assert!(ScalarLexer::is_resumable(tokens[0].state));
    assert!(!ScalarLexer::is_resumable(0xF));
    assert!(!ScalarLexer::is_resumable(0xFFF0 | 1));
}

fn doc_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("key"),
        Just(": "),
        Just(":"),
        Just("- "),
        Just(" "),
        Just("\n"),
        Just("\r\n"),
        Just("  "),
        Just("'"),
        Just("\""),
        Just("\\"),
        Just("#"),
        Just("|"),
        Just(">-"),
        Just("${"),
        Just("}"),
        Just("é"),
    ];
    prop::collection::vec(piece, 0..24).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn tokens_tile_the_input(text in doc_strategy()) {
        let tokens = ScalarLexer::tokenize(&text);
        let mut pos = 0;
        for t in &tokens {
            prop_assert_eq!(t.token.span.start, pos);
            prop_assert!(t.token.span.end > t.token.span.start);
            pos = t.token.span.end;
        }
        prop_assert_eq!(pos as usize, text.len());
    }

    #[test]
    fn resuming_reproduces_the_rest(text in doc_strategy()) {
        let tokens = ScalarLexer::tokenize(&text);
        let len = text.len() as u32;
        for (i, t) in tokens.iter().enumerate() {
            if !ScalarLexer::is_resumable(t.state) {
                continue;
            }
            let mut lexer = ScalarLexer::new();
            lexer.start(&text, t.token.span.start, len, t.state);
            let rest: Vec<HostToken> = std::iter::from_fn(|| lexer.next_token()).collect();
            prop_assert_eq!(&rest[..], &tokens[i..]);
        }
    }
}
