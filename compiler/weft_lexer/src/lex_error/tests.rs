use super::*;

#[test]
fn error_construction() {
    let err = LexError::unterminated_string(Span::new(10, 15));
    assert_eq!(err.span, Span::new(10, 15));
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.position(), 10);
}

#[test]
fn error_codes_are_lexer_codes() {
    let errors = [
        LexError::unterminated_string(Span::new(0, 1)),
        LexError::unterminated_block_comment(Span::new(0, 1)),
        LexError::invalid_unicode_escape(Span::new(0, 1)),
    ];
    for err in &errors {
        assert!(err.code().is_lexer_error(), "{err}");
    }
    assert_eq!(errors[1].code(), ErrorCode::E0002);
}

#[test]
fn display_includes_span() {
    let err = LexError::invalid_unicode_escape(Span::new(3, 9));
    assert_eq!(err.to_string(), "invalid unicode escape at 3..9");
}

#[test]
fn diagnostic_points_at_start() {
    let diag = LexError::unterminated_string(Span::new(4, 20)).to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.primary_span(), Some(Span::point(4)));
    assert!(diag.help.is_some());
}
