//! Lexical tokens.
//!
//! Tokens own their text: the interpreter lexes one short snippet per
//! request, so interning would cost more than it saves.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// A token with its span in the source.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a token with a dummy span, for tests.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Reserved words that shape the grammar.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Keyword {
    /// Opens a `do ... end` block.
    Do,
    /// Closes a `do ... end` block.
    End,
}

impl Keyword {
    /// Resolve an identifier to a keyword.
    pub fn from_ident(text: &str) -> Option<Keyword> {
        match text {
            "do" => Some(Keyword::Do),
            "end" => Some(Keyword::End),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Do => "do",
            Keyword::End => "end",
        }
    }
}

/// Numeric literal value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Lossy view as `f64`.
    #[allow(clippy::cast_precision_loss, reason = "display/arith helper only")]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }

    /// Integer value, if this number is integral.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by fract() and range checks"
    )]
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::Float(f)
                if f.fract() == 0.0 && f >= -9_007_199_254_740_992.0 && f <= 9_007_199_254_740_992.0 =>
            {
                Some(f as i64)
            }
            Number::Float(_) => None,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Token kinds.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// `text`, `font_size`, `Kernel`
    Identifier(String),
    /// `do`, `end`
    Keyword(Keyword),
    /// Any single non-alphanumeric character: `.`, `(`, `,`, `:` ...
    Punctuation(char),
    /// Unescaped string contents.
    StringLiteral(String),
    NumberLiteral(Number),
    /// `:center` (stored without the colon)
    SymbolLiteral(String),
    BooleanLiteral(bool),
    NilLiteral,
    /// `# note` (only kept by `tokenize_with_comments`)
    Comment(String),
    Eof,
}

impl TokenKind {
    /// Whether this token is the given punctuation character.
    #[inline]
    pub fn is_punct(&self, c: char) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == c)
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// Short description for "expected X, found Y" messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Identifier(name) => format!("identifier `{name}`"),
            TokenKind::Keyword(kw) => format!("keyword `{}`", kw.as_str()),
            TokenKind::Punctuation(c) => format!("`{c}`"),
            TokenKind::StringLiteral(_) => "string literal".to_string(),
            TokenKind::NumberLiteral(n) => format!("number `{n}`"),
            TokenKind::SymbolLiteral(name) => format!("symbol `:{name}`"),
            TokenKind::BooleanLiteral(b) => format!("`{b}`"),
            TokenKind::NilLiteral => "`nil`".to_string(),
            TokenKind::Comment(_) => "comment".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "Ident({name})"),
            TokenKind::Keyword(kw) => write!(f, "Keyword({})", kw.as_str()),
            TokenKind::Punctuation(c) => write!(f, "Punct({c:?})"),
            TokenKind::StringLiteral(s) => write!(f, "String({s:?})"),
            TokenKind::NumberLiteral(n) => write!(f, "Number({n})"),
            TokenKind::SymbolLiteral(name) => write!(f, "Symbol({name})"),
            TokenKind::BooleanLiteral(b) => write!(f, "Bool({b})"),
            TokenKind::NilLiteral => write!(f, "Nil"),
            TokenKind::Comment(text) => write!(f, "Comment({text:?})"),
            TokenKind::Eof => write!(f, "Eof"),
        }
    }
}

/// Ordered token sequence, always terminated by a single `Eof`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The final token (`Eof` for lexer-produced lists).
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}
