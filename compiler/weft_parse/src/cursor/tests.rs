use super::*;

fn list(kinds: Vec<TokenKind>) -> TokenList {
    kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            let start = u32::try_from(i).unwrap();
            Token::new(kind, Span::new(start, start + 1))
        })
        .collect()
}

#[test]
fn skips_comments_everywhere() {
    let tokens = list(vec![
        TokenKind::Comment("head".into()),
        TokenKind::Identifier("text".into()),
        TokenKind::Comment("mid".into()),
        TokenKind::Punctuation('('),
        TokenKind::Eof,
    ]);
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.position(), 1);
    assert!(!cursor.check_punct('('));
    assert!(cursor.peek_kind().is_punct('('));
    cursor.advance();
    assert!(cursor.check_punct('('));
    assert_eq!(cursor.previous_span(), Span::new(1, 2));
}

#[test]
fn never_advances_past_eof() {
    let tokens = list(vec![TokenKind::Eof]);
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn missing_eof_is_tolerated() {
    let tokens = list(vec![TokenKind::Identifier("divider".into())]);
    let mut cursor = Cursor::new(&tokens);
    assert!(!cursor.is_at_end());
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.peek_kind(), &TokenKind::Eof);
}

#[test]
fn separators() {
    let tokens = list(vec![
        TokenKind::Punctuation(';'),
        TokenKind::Punctuation(';'),
        TokenKind::Keyword(Keyword::End),
        TokenKind::Eof,
    ]);
    let mut cursor = Cursor::new(&tokens);
    cursor.skip_separators();
    assert!(cursor.check_keyword(Keyword::End));
}
