use crate::ast::{
    ArrayExpression, BooleanLiteral, Node, NullLiteral, NumericLiteral, ObjectExpression,
    ObjectProperty, Root, StringLiteral,
};
use crate::error::{Error, Kind};
use crate::options::ParseOptions;
use crate::span::{Position, Span};
use crate::token::{Token, TokenKind};
use log::debug;

pub type ParseResult<T> = std::result::Result<T, Error>;

/// Forward only reader over a token slice that steps over whitespace and comments.
#[derive(Debug, Clone)]
pub struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    index: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, index: 0 }
    }

    /// Next significant token, without consuming it.
    pub fn peek(&mut self) -> Option<&'t Token<'a>> {
        let tokens = self.tokens;

        while let Some(token) = tokens.get(self.index) {
            if !token.kind.is_trivia() {
                return Some(token);
            }
            self.index += 1;
        }

        None
    }

    /// Consumes and returns the next significant token.
    pub fn bump(&mut self) -> Option<&'t Token<'a>> {
        let token = self.peek()?;
        self.index += 1;
        Some(token)
    }

    /// Where the input ends, used to locate errors found at end of input.
    pub fn end_position(&self) -> Position {
        self.tokens
            .last()
            .map(|token| token.span.end)
            .unwrap_or_default()
    }
}

enum ObjectState {
    ExpectKey,
    ExpectSeparator(StringLiteral),
    ExpectValue(StringLiteral),
    ExpectCommaOrEnd,
}

enum ArrayState {
    ExpectElement,
    ExpectCommaOrEnd,
}

fn token_error(token: &Token, kind: Kind) -> Error {
    Error::new(token.span.start, token.span.end, kind)
}

fn unexpected(token: &Token) -> Error {
    token_error(token, Kind::UnexpectedToken(token.text.to_string()))
}

fn string_literal(token: &Token) -> StringLiteral {
    StringLiteral {
        value: token.text.to_string(),
        span: token.span,
    }
}

struct Parser<'t, 'a> {
    cursor: Cursor<'t, 'a>,
    options: ParseOptions,
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn at_end(&self, kind: Kind) -> Error {
        let position = self.cursor.end_position();

        Error::new(position, position, kind)
    }

    fn nested<T>(
        &mut self,
        open: &Token,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= self.options.max_depth {
            return Err(token_error(
                open,
                Kind::NestingTooDeep(self.options.max_depth),
            ));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;

        result
    }

    fn value(&mut self) -> ParseResult<Node> {
        let token = match self.cursor.bump() {
            Some(token) => token,
            None => return Err(self.at_end(Kind::MissingValue)),
        };

        match token.kind {
            TokenKind::BraceOpen => self.nested(token, |parser| parser.object(token)),
            TokenKind::BracketOpen => self.nested(token, |parser| parser.array(token)),
            TokenKind::String => Ok(Node::String(string_literal(token))),
            TokenKind::Number => {
                let value = token.text.parse::<f64>().map_err(|_| {
                    token_error(token, Kind::MalformedNumber(token.text.to_string()))
                })?;

                Ok(Node::Number(NumericLiteral {
                    value,
                    span: token.span,
                }))
            }
            TokenKind::Identifier => match &*token.text {
                "true" => Ok(Node::Boolean(BooleanLiteral {
                    value: true,
                    span: token.span,
                })),
                "false" => Ok(Node::Boolean(BooleanLiteral {
                    value: false,
                    span: token.span,
                })),
                "null" => Ok(Node::Null(NullLiteral { span: token.span })),
                _ => Err(unexpected(token)),
            },
            _ => Err(unexpected(token)),
        }
    }

    fn object(&mut self, open: &Token) -> ParseResult<Node> {
        let mut properties = Vec::new();
        let mut state = ObjectState::ExpectKey;

        loop {
            let token = match self.cursor.peek() {
                Some(token) => token,
                None => {
                    return Err(match state {
                        ObjectState::ExpectValue(_) => self.at_end(Kind::MissingValue),
                        ObjectState::ExpectSeparator(_) => self.at_end(Kind::MissingSeparator),
                        _ => self.at_end(Kind::MissingObjectBracket),
                    })
                }
            };

            state = match (state, token.kind) {
                (ObjectState::ExpectKey | ObjectState::ExpectCommaOrEnd, TokenKind::BraceClose) => {
                    self.cursor.bump();

                    return Ok(Node::Object(ObjectExpression {
                        properties,
                        span: open.span.to(token.span),
                    }));
                }
                (
                    ObjectState::ExpectKey
                    | ObjectState::ExpectSeparator(_)
                    | ObjectState::ExpectValue(_),
                    TokenKind::Comma,
                ) => return Err(token_error(token, Kind::MissingSeparator)),
                (ObjectState::ExpectKey, TokenKind::String) => {
                    self.cursor.bump();
                    ObjectState::ExpectSeparator(string_literal(token))
                }
                (ObjectState::ExpectKey, _) => return Err(unexpected(token)),
                (ObjectState::ExpectSeparator(key), TokenKind::Colon) => {
                    self.cursor.bump();
                    ObjectState::ExpectValue(key)
                }
                (ObjectState::ExpectSeparator(_), _) => {
                    return Err(token_error(token, Kind::MissingSeparator))
                }
                (ObjectState::ExpectValue(_), TokenKind::BraceClose) => {
                    return Err(token_error(token, Kind::MissingValue))
                }
                (ObjectState::ExpectValue(key), _) => {
                    let value = self.value()?;
                    let span = key.span.to(value.span());

                    properties.push(ObjectProperty { key, value, span });
                    ObjectState::ExpectCommaOrEnd
                }
                (ObjectState::ExpectCommaOrEnd, TokenKind::Comma) => {
                    self.cursor.bump();
                    ObjectState::ExpectKey
                }
                (ObjectState::ExpectCommaOrEnd, _) => {
                    return Err(token_error(token, Kind::MissingComma))
                }
            };
        }
    }

    fn array(&mut self, open: &Token) -> ParseResult<Node> {
        let mut elements = Vec::new();
        let mut state = ArrayState::ExpectElement;

        loop {
            let token = match self.cursor.peek() {
                Some(token) => token,
                None => return Err(self.at_end(Kind::MissingArrayBracket)),
            };

            state = match (state, token.kind) {
                (_, TokenKind::BracketClose) => {
                    self.cursor.bump();

                    return Ok(Node::Array(ArrayExpression {
                        elements,
                        span: open.span.to(token.span),
                    }));
                }
                (ArrayState::ExpectElement, TokenKind::Comma) => {
                    return Err(token_error(token, Kind::MissingSeparator))
                }
                (ArrayState::ExpectElement, _) => {
                    elements.push(self.value()?);
                    ArrayState::ExpectCommaOrEnd
                }
                (ArrayState::ExpectCommaOrEnd, TokenKind::Comma) => {
                    self.cursor.bump();
                    ArrayState::ExpectElement
                }
                (ArrayState::ExpectCommaOrEnd, _) => {
                    return Err(token_error(token, Kind::MissingComma))
                }
            };
        }
    }
}

/// Builds the syntax tree of a whole document.
///
/// Exactly one value is expected; anything significant after it is an error.
pub fn parse_tokens(tokens: &[Token], options: ParseOptions) -> ParseResult<Root> {
    let span = match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.to(last.span),
        _ => Span::default(),
    };

    let mut parser = Parser {
        cursor: Cursor::new(tokens),
        options,
        depth: 0,
    };

    let child = match parser.cursor.peek() {
        None if options.allow_empty => Node::Null(NullLiteral { span }),
        None => return Err(parser.at_end(Kind::MissingValue)),
        Some(_) => parser.value()?,
    };

    if let Some(token) = parser.cursor.peek() {
        return Err(unexpected(token));
    }

    debug!(
        "parsed {} from line {} to line {}",
        child.kind_name(),
        span.start.line,
        span.end.line
    );

    Ok(Root { child, span })
}
