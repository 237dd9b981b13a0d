use pretty_assertions::assert_eq;

use super::*;
use crate::diagnostic::expected_expression;

#[test]
fn line_col_lookup() {
    let source = "a: 1\nb: ${x +}\n";
    let index = LineIndex::build(source);
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.line_col(source, 0), (1, 1));
    assert_eq!(index.line_col(source, 5), (2, 1));
    assert_eq!(index.line_col(source, 8), (2, 4));
}

#[test]
fn columns_count_characters() {
    let source = "é: ${a}";
    let index = LineIndex::build(source);
    // `é` is two bytes, one column
    assert_eq!(index.line_col(source, 2), (1, 2));
}

#[test]
fn render_prefixes_position() {
    let source = "k: ${)}";
    let index = LineIndex::build(source);
    let diag = expected_expression(Span::new(5, 6), ")");
    assert_eq!(
        index.render(source, &diag),
        "1:6: Expected: expression expected, got ')'"
    );
}

#[test]
fn line_span_strips_crlf() {
    let source = "one\r\ntwo";
    let index = LineIndex::build(source);
    assert_eq!(index.line_span(source, 1), Span::new(0, 3));
    assert_eq!(index.line_span(source, 6), Span::new(5, 8));
}
