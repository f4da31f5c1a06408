#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::needless_doctest_main)]
//! This crate is a json parser that also accepts comments: `// line` comments and `/* block */`
//! comments may appear anywhere whitespace can. It returns a plain [`Value`](value::Value) tree
//! where objects keep the order in which keys first appeared. `Value` implements
//! [Serialize](https://docs.rs/serde/latest/serde/ser/trait.Serialize.html) so it can be handed to
//! any [serde](https://serde.rs/) format.
//!
//! ## How does it work ?
//!
//! Parsing runs in three steps, each one usable on its own:
//!
//! - [`tokenizer::tokenize`] cuts the text into tokens carrying their line and column
//! - [`parser::parse_tokens`] builds a syntax tree, skipping whitespace and comments
//! - [`materialize::materialize`] turns the tree into a [`Value`](value::Value)
//!
//! ## How to use it ?
//!
//! ```rust
//! use commented_json::parse;
//!
//! fn main() {
//!     let json = r#"{
//!         // who to greet
//!         "hello": "world" /* trailing */
//!     }"#;
//!
//!     let parsed = parse(json).unwrap();
//!
//!     assert_eq!(parsed.get("hello").and_then(|v| v.as_str()), Some("world"));
//! }
//! ```
//!
//! Errors point at the offending text:
//!
//! ```rust
//! use commented_json::{error::Kind, parse};
//!
//! let error = parse("{\"a\" 1}").unwrap_err();
//!
//! assert_eq!(error.kind, Kind::MissingSeparator);
//! assert_eq!((error.start.line, error.start.col), (1, 6));
//! ```
//!
//! ## What it does not do
//!
//! Numbers have no exponent part (`1e10` is rejected) and a backslash in a string only keeps the
//! next character as is: `\"` gives a quote, `\n` gives the letter `n`.

extern crate bytecount;
extern crate indexmap;
extern crate log;
extern crate memchr;
extern crate nom;
extern crate serde;

mod input;
mod ser;

pub mod ast;
pub mod error;
pub mod materialize;
pub mod options;
pub mod parser;
pub mod span;
pub mod token;
pub mod tokenizer;
pub mod value;

pub use error::Error;
pub use options::ParseOptions;
pub use value::{Map, Value};

/// Parses a document with the default [`ParseOptions`].
pub fn parse(text: &str) -> Result<Value, Error> {
    parse_with(text, ParseOptions::default())
}

pub fn parse_with(text: &str, options: ParseOptions) -> Result<Value, Error> {
    let tokens = tokenizer::tokenize(text)?;

    let root = parser::parse_tokens(&tokens, options)?;

    Ok(materialize::materialize(root))
}
