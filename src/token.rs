use crate::span::Span;
use std::borrow::Cow;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    Colon,
    Comma,
    String,
    Number,
    Identifier,
    Whitespace,
    LineComment,
    BlockComment,
}

impl TokenKind {
    /// Whitespace and comments, which never reach the syntax tree.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }
}

/// A lexical unit.
///
/// `text` is the raw source slice, except for strings where it holds the value with escape
/// characters removed.
#[derive(Debug, PartialEq, Clone)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Cow<'a, str>,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: Cow<'a, str>, span: Span) -> Self {
        Self { kind, text, span }
    }
}
