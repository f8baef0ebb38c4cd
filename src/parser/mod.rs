//! Parser Module
//!
//! Decodes one line of `key: value, key: value, ...` text into a [`Record`].
//!
//! ## Grammar
//! ```text
//! record   := (pair ("," pair)*)?
//! pair     := spaces* key spaces* ":" spaces* value spaces*
//! key      := letter (letter | digit | "_" | "-")*
//! value    := string | integer | boolean
//! string   := '"' (escaped-char | any-char-except-quote)* '"'
//! integer  := "-"? digit+
//! boolean  := "true" | "false"
//! ```
//!
//! A backslash inside a string yields the following character literally.
//! Duplicate keys are not an error: the last occurrence wins.

mod error;
mod grammar;
mod value;

pub use error::SyntaxError;
pub use grammar::{parse, Parser};
pub use value::{Record, Value};

pub(crate) use value::write_quoted;
