//! Syntax tree produced by the parser.
//!
//! Every node carries the span it was read from. Comments and whitespace never appear here.

use crate::span::Span;

#[derive(Debug, PartialEq, Clone)]
pub struct Root {
    pub child: Node,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    Object(ObjectExpression),
    Array(ArrayExpression),
    String(StringLiteral),
    Number(NumericLiteral),
    Boolean(BooleanLiteral),
    Null(NullLiteral),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Self::Object(node) => node.span,
            Self::Array(node) => node.span,
            Self::String(node) => node.span,
            Self::Number(node) => node.span,
            Self::Boolean(node) => node.span,
            Self::Null(node) => node.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Object(_) => "ObjectExpression",
            Self::Array(_) => "ArrayExpression",
            Self::String(_) => "StringLiteral",
            Self::Number(_) => "NumericLiteral",
            Self::Boolean(_) => "BooleanLiteral",
            Self::Null(_) => "NullLiteral",
        }
    }
}

/// Properties in source order, duplicates included.
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectProperty>,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ObjectProperty {
    pub key: StringLiteral,
    pub value: Node,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ArrayExpression {
    pub elements: Vec<Node>,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct NumericLiteral {
    pub value: f64,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct NullLiteral {
    pub span: Span,
}
