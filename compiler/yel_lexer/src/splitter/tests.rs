#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn split(text: &str) -> Vec<(TokenKind, &str)> {
    split_document(text)
        .into_iter()
        .map(|t| (t.token.kind, t.token.text(text)))
        .collect()
}

fn expr_tokens(text: &str) -> Vec<(TokenKind, &str)> {
    split(text)
        .into_iter()
        .filter(|(k, _)| {
            matches!(k, TokenKind::ExprStart | TokenKind::ExprBody | TokenKind::ExprEnd)
        })
        .collect()
}

#[test]
fn text_without_expressions_passes_through() {
    let text = "key: 'value' # c\n";
    let host: Vec<Token> = ScalarLexer::tokenize(text).into_iter().map(|t| t.token).collect();
    let split: Vec<Token> = split_document(text).into_iter().map(|t| t.token).collect();
    assert_eq!(split, host);
}

#[test]
fn inline_expression_in_plain_text() {
    use TokenKind::*;
    assert_eq!(
        split("a ${b} c"),
        vec![
            (PlainText, "a "),
            (ExprStart, "${"),
            (ExprBody, "b"),
            (ExprEnd, "}"),
            (PlainText, " c"),
        ]
    );
}

#[test]
fn several_expressions_in_one_token() {
    use TokenKind::*;
    assert_eq!(
        split("${a}${}x${ {k: 1}['k'] }"),
        vec![
            (ExprStart, "${"),
            (ExprBody, "a"),
            (ExprEnd, "}"),
            (ExprStart, "${"),
            (ExprEnd, "}"),
            (PlainText, "x"),
            (ExprStart, "${"),
            (ExprBody, " {k: 1}['k'] "),
            (ExprEnd, "}"),
        ]
    );
}

#[test]
fn quotes_hide_closing_braces() {
    assert_eq!(
        expr_tokens("${'}' + \"{\"}"),
        vec![
            (TokenKind::ExprStart, "${"),
            (TokenKind::ExprBody, "'}' + \"{\""),
            (TokenKind::ExprEnd, "}"),
        ]
    );
}

#[test]
fn escaped_expression_start_is_literal() {
    assert_eq!(expr_tokens(r#""a \${x} b""#), vec![]);
    assert_eq!(expr_tokens(r"a \${x} b"), vec![]);
}

#[test]
fn escaped_backslash_keeps_expression_active() {
    use TokenKind::*;
    assert_eq!(
        split(r#""\\${x}""#),
        vec![
            (DoubleQuote, "\""),
            (DoubleQuotedText, r"\\"),
            (ExprStart, "${"),
            (ExprBody, "x"),
            (ExprEnd, "}"),
            (DoubleQuote, "\""),
        ]
    );
}

#[test]
fn double_quoted_body_is_scanned_decoded() {
    assert_eq!(
        expr_tokens(r#""${f(\"}\")}""#),
        vec![
            (TokenKind::ExprStart, "${"),
            (TokenKind::ExprBody, r#"f(\"}\")"#),
            (TokenKind::ExprEnd, "}"),
        ]
    );
}

#[test]
fn unclosed_in_plain_text_at_end_of_buffer() {
    assert_eq!(
        expr_tokens("${unclosed"),
        vec![
            (TokenKind::ExprStart, "${"),
            (TokenKind::ExprBody, "unclosed"),
        ]
    );
}

#[test]
fn unclosed_in_quoted_scalar_stops_at_closing_quote() {
    use TokenKind::*;
    assert_eq!(
        split("\"${unclosed\" x"),
        vec![
            (DoubleQuote, "\""),
            (ExprStart, "${"),
            (ExprBody, "unclosed"),
            (DoubleQuote, "\""),
            (Whitespace, " "),
            (PlainText, "x"),
        ]
    );
}

#[test]
fn block_scalar_expression_spans_lines() {
    use TokenKind::*;
    let text = "v: |\n  ${a +\n  b}\n";
    assert_eq!(
        split(text)[5..].to_vec(),
        vec![
            (Indent, "  "),
            (ExprStart, "${"),
            (ExprBody, "a +"),
            (LineBreak, "\n"),
            (Indent, "  "),
            (ExprBody, "b"),
            (ExprEnd, "}"),
            (LineBreak, "\n"),
        ]
    );
}

#[test]
fn plain_scalar_expression_spans_lines() {
    use TokenKind::*;
    assert_eq!(
        split("k: ${a +\n  b} rest")[3..].to_vec(),
        vec![
            (ExprStart, "${"),
            (ExprBody, "a +"),
            (LineBreak, "\n"),
            (Indent, "  "),
            (ExprBody, "b"),
            (ExprEnd, "}"),
            (PlainText, " rest"),
        ]
    );
}

#[test]
fn comment_ends_continuation() {
    let text = "${a\n# c\n${b}";
    let tokens = split_document(text);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.token.kind).collect();
    use TokenKind::*;
    assert_eq!(
        kinds,
        vec![ExprStart, ExprBody, LineBreak, Comment, LineBreak, ExprStart, ExprBody, ExprEnd]
    );
    assert!(tokens[3].state.in_continuation);
    assert!(!tokens[4].state.in_continuation);
}

#[test]
fn sub_token_states() {
    let tokens = split_document("a ${b} c");
    let states: Vec<ScanState> = tokens.iter().map(|t| t.state).collect();
    assert!(!states[0].mid_segment);
    assert!(states[1..].iter().all(|s| s.mid_segment));
    assert_eq!(states[2].brace_depth, 1);
    assert_eq!(states[0].brace_depth, 0);
    assert!(tokens.iter().all(|t| t.origin == TokenKind::PlainText));

    type Splitter<'a> = ExprSplitter<'a, ScalarLexer>;
    assert!(Splitter::is_resumable(states[0]));
    assert!(!Splitter::is_resumable(states[1]));
}

#[test]
fn continuation_states_are_not_resumable() {
    let tokens = split_document("${a\n b}");
    let line_break = tokens[2];
    assert_eq!(line_break.token.kind, TokenKind::LineBreak);
    assert!(line_break.state.in_continuation);
    assert!(!ExprSplitter::<ScalarLexer>::is_resumable(line_break.state));
}

#[test]
fn resume_rejects_unsafe_states() {
    let text = "a ${b} c";
    let tokens = split_document(text);
    let state = tokens[1].state;
    let err = ExprSplitter::resume(ScalarLexer::new(), text, 2, 8, state).err();
    assert_eq!(err, Some(ResumeError::NotResumable { offset: 2, state }));
}

#[test]
fn start_honors_carried_continuation() {
    use TokenKind::*;
    let text = "b} x";
    let state = ScanState {
        host_state: 1,
        in_continuation: true,
        brace_depth: 1,
        ..ScanState::INITIAL
    };
    let kinds: Vec<(TokenKind, &str)> = ExprSplitter::start(ScalarLexer::new(), text, 0, 4, state)
        .map(|t| (t.token.kind, t.token.text(text)))
        .collect();
    assert_eq!(
        kinds,
        vec![(ExprBody, "b"), (ExprEnd, "}"), (PlainText, " x")]
    );
}

#[test]
fn cursor_style_accessors() {
    let text = "${x}";
    let mut splitter = ExprSplitter::start(ScalarLexer::new(), text, 0, 4, ScanState::INITIAL);
    assert_eq!(splitter.state(), ScanState::INITIAL);
    assert_eq!(splitter.kind(), None);
    assert_eq!(splitter.advance().map(|t| t.kind), Some(TokenKind::ExprStart));
    assert_eq!(splitter.span(), Some(Span::new(0, 2)));
    splitter.advance();
    assert_eq!(splitter.token().map(|t| t.text(text)), Some("x"));
    assert_eq!(splitter.state().brace_depth, 1);
    splitter.advance();
    assert_eq!(splitter.kind(), Some(TokenKind::ExprEnd));
    assert_eq!(splitter.advance(), None);
}

fn doc_strategy() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("a"),
        Just("key: "),
        Just("- "),
        Just(" "),
        Just("\n"),
        Just("\n  "),
        Just("'"),
        Just("\""),
        Just("\\"),
        Just("# "),
        Just("| \n  "),
        Just("${"),
        Just("{"),
        Just("}"),
        Just(": "),
        Just("é"),
    ];
    prop::collection::vec(piece, 0..32).prop_map(|v| v.concat())
}

proptest! {
    #[test]
    fn reconstruction_and_contiguity(text in doc_strategy()) {
        let tokens = split_document(&text);
        let mut rebuilt = String::new();
        let mut pos = 0;
        for t in &tokens {
            prop_assert_eq!(t.token.span.start, pos);
            prop_assert!(t.token.span.end > t.token.span.start);
            rebuilt.push_str(t.token.text(&text));
            pos = t.token.span.end;
        }
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn determinism(text in doc_strategy()) {
        prop_assert_eq!(split_document(&text), split_document(&text));
    }

    #[test]
    fn restart_fidelity(text in doc_strategy()) {
        let tokens = split_document(&text);
        let len = u32::try_from(text.len()).unwrap();
        for (i, t) in tokens.iter().enumerate() {
            if !ExprSplitter::<ScalarLexer>::is_resumable(t.state) {
                continue;
            }
            let resumed: Vec<SplitToken> =
                ExprSplitter::resume(ScalarLexer::new(), &text, t.token.span.start, len, t.state)
                    .unwrap()
                    .collect();
            prop_assert_eq!(&resumed[..], &tokens[i..]);
        }
    }
}
