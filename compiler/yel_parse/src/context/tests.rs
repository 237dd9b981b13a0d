use super::*;

#[test]
fn default_has_no_flags() {
    let ctx = ParseContext::default();
    assert_eq!(ctx, ParseContext::NONE);
    assert!(!ctx.has(ParseContext::COLON_IS_SEPARATOR));
}

#[test]
fn flags_combine() {
    let ctx = ParseContext::NONE.with(ParseContext::COLON_IS_SEPARATOR);
    assert!(ctx.has(ParseContext::COLON_IS_SEPARATOR));
    assert_eq!(ctx.with(ParseContext::COLON_IS_SEPARATOR), ctx);
}
