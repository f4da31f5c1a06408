use crate::error::{Error, Kind};
use crate::input::Input;
use crate::span::{Position, Span};
use crate::token::{Token, TokenKind};
use log::{debug, trace};
use nom::{
    branch::alt,
    bytes::complete::{tag, take, take_till, take_until},
    character::complete::{alpha1, anychar, char, digit0, multispace1, none_of},
    combinator::{opt, recognize},
    error::{ErrorKind, ParseError},
    multi::fold_many0,
    sequence::{pair, preceded, tuple},
    Err, IResult, Parser, Slice,
};
use std::borrow::Cow;

type Result<'a, R> = IResult<Input<'a>, R, Error>;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Wraps a recognizer so that whatever it consumes becomes a token of `kind`.
fn spanned<'a, P>(kind: TokenKind, mut parser: P) -> impl FnMut(Input<'a>) -> Result<'a, Token<'a>>
where
    P: Parser<Input<'a>, Input<'a>, Error>,
{
    move |i: Input<'a>| {
        let (rest, raw) = parser.parse(i)?;

        let span = Span::new(Position::from(raw), Position::from(rest));

        Ok((rest, Token::new(kind, Cow::Borrowed(raw.fragment()), span)))
    }
}

fn string_char(i: Input) -> Result<char> {
    alt((none_of("\"\\"), preceded(char('\\'), anychar)))(i)
}

fn string(i: Input) -> Result<Token> {
    let start = Position::from(i);

    let (i, _) = char('"')(i)?;

    let (i, value) = fold_many0(string_char, String::new, |mut string, c| {
        string.push(c);
        string
    })(i)?;

    let (i, _) = char('"')(i).map_err(|_: Err<Error>| {
        Err::Failure(Error::new(
            start,
            Position::from(i),
            Kind::UnterminatedString,
        ))
    })?;

    let span = Span::new(start, Position::from(i));

    Ok((i, Token::new(TokenKind::String, Cow::Owned(value), span)))
}

fn number(i: Input) -> Result<Token> {
    let (rest, token) = spanned(
        TokenKind::Number,
        recognize(tuple((
            opt(char('-')),
            digit0,
            opt(pair(char('.'), digit0)),
        ))),
    )(i)?;

    let text = &token.text;

    if !text.bytes().any(|b| b.is_ascii_digit()) || text.ends_with('.') {
        return Err(Err::Failure(Error::new(
            token.span.start,
            token.span.end,
            Kind::MalformedNumber(text.to_string()),
        )));
    }

    Ok((rest, token))
}

fn line_comment(i: Input) -> Result<Token> {
    spanned(
        TokenKind::LineComment,
        recognize(pair(
            tag("//"),
            take_till(|c: char| c == '\n' || c == '\r'),
        )),
    )(i)
}

fn block_comment(i: Input) -> Result<Token> {
    let start = Position::from(i);

    spanned(
        TokenKind::BlockComment,
        recognize(tuple((tag("/*"), take_until("*/"), tag("*/")))),
    )(i)
    .map_err(|e| match e {
        Err::Error(e) => Err::Failure(Error::new(
            start,
            e.end,
            Kind::UnterminatedBlockComment,
        )),
        e => e,
    })
}

fn next_token(i: Input) -> Result<Token> {
    let first = match i.fragment().chars().next() {
        Some(c) => c,
        None => return Err(Err::Error(Error::from_error_kind(i, ErrorKind::Eof))),
    };

    match first {
        '{' => spanned(TokenKind::BraceOpen, take(1usize))(i),
        '}' => spanned(TokenKind::BraceClose, take(1usize))(i),
        '[' => spanned(TokenKind::BracketOpen, take(1usize))(i),
        ']' => spanned(TokenKind::BracketClose, take(1usize))(i),
        ':' => spanned(TokenKind::Colon, take(1usize))(i),
        ',' => spanned(TokenKind::Comma, take(1usize))(i),
        '"' => string(i),
        '-' | '0'..='9' => number(i),
        'a'..='z' | 'A'..='Z' => spanned(TokenKind::Identifier, alpha1)(i),
        ' ' | '\t' | '\n' | '\r' => spanned(TokenKind::Whitespace, multispace1)(i),
        '/' if i.starts_with("//") => line_comment(i),
        '/' if i.starts_with("/*") => block_comment(i),
        c => Err(Err::Failure(Error::new(
            Position::from(i),
            Position::from(i.slice(c.len_utf8()..)),
            Kind::UnexpectedCharacter(c),
        ))),
    }
}

fn unwrap_nom_error<T>(value: Result<T>) -> std::result::Result<(Input, T), Error> {
    match value {
        Ok(v) => Ok(v),
        Err(Err::Error(e)) | Err(Err::Failure(e)) => Err(e),
        Err(Err::Incomplete(_)) => Err(Error::new(
            Position::default(),
            Position::default(),
            Kind::NomError(ErrorKind::Complete),
        )),
    }
}

/// Splits `text` into tokens, trivia included.
///
/// Stops at the first lexical error. A leading byte order mark is skipped without a token.
pub fn tokenize(text: &str) -> std::result::Result<Vec<Token<'_>>, Error> {
    let mut input = Input::new(text);

    if input.fragment().starts_with(BYTE_ORDER_MARK) {
        input = input.slice(BYTE_ORDER_MARK.len_utf8()..);
    }

    let mut tokens = Vec::new();

    while !input.is_empty() {
        let (rest, token) = unwrap_nom_error(next_token(input))?;

        trace!(
            "{:?} {:?} at {}:{}",
            token.kind,
            token.text,
            token.span.start.line,
            token.span.start.col
        );

        tokens.push(token);
        input = rest;
    }

    debug!("tokenized {} bytes into {} tokens", text.len(), tokens.len());

    Ok(tokens)
}
