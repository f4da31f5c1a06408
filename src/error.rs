use crate::{input::Input, span::Position};
use nom::error::{ErrorKind, ParseError};
use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub enum Kind {
    // Lexical errors, raised while tokenizing
    UnexpectedCharacter(char),
    UnterminatedString,
    MalformedNumber(String),
    UnterminatedBlockComment,

    // Syntactic errors, raised while building the tree
    UnexpectedToken(String),
    MissingSeparator,
    MissingValue,
    MissingComma,
    MissingObjectBracket,
    MissingArrayBracket,
    NestingTooDeep(usize),

    NomError(ErrorKind),
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(c) => write!(f, "unexpected character {:?}", c),
            Self::UnterminatedString => write!(f, "unterminated string"),
            Self::MalformedNumber(number) => write!(f, "malformed number '{}'", number),
            Self::UnterminatedBlockComment => write!(f, "unterminated block comment"),
            Self::UnexpectedToken(token) => write!(f, "unexpected token '{}'", token),
            Self::MissingSeparator => write!(f, "expected ':' or a value"),
            Self::MissingValue => write!(f, "expected a value"),
            Self::MissingComma => write!(f, "expected ','"),
            Self::MissingObjectBracket => write!(f, "expected '}}'"),
            Self::MissingArrayBracket => write!(f, "expected ']'"),
            Self::NestingTooDeep(limit) => {
                write!(f, "nesting deeper than {} levels", limit)
            }
            Self::NomError(kind) => write!(f, "parser error: {}", kind.description()),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Error {
    pub start: Position,
    pub end: Position,
    pub kind: Kind,
}

impl Error {
    pub fn new(start: Position, end: Position, kind: Kind) -> Self {
        Self { start, end, kind }
    }

    /// Error raised by the tokenizer.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self.kind,
            Kind::UnexpectedCharacter(_)
                | Kind::UnterminatedString
                | Kind::UnterminatedBlockComment
                | Kind::MalformedNumber(_)
        )
    }

    /// Error raised by the parser.
    pub fn is_syntactic(&self) -> bool {
        !self.is_lexical() && !matches!(self.kind, Kind::NomError(_))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.start.line, self.start.col
        )
    }
}

impl std::error::Error for Error {}

impl<'a> ParseError<Input<'a>> for Error {
    fn from_error_kind(input: Input<'a>, kind: ErrorKind) -> Self {
        let position = Position::from(input);

        Self::new(position, position, Kind::NomError(kind))
    }

    fn append(_input: Input<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
