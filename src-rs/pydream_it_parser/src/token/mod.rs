//! Token parsers for the subset of Python found in PySB model files.
//!
//! - `literal`: numbers and strings
//! - `naming`: identifiers and raw words
//! - `structure`: whitespace, line continuations, and comments
//! - `symbol`: punctuation
//!
//! Token parsers consume trailing inline whitespace (spaces and tabs) after
//! the matched content, but never newlines. Inside a call, newlines are
//! insignificant and are skipped with [`structure::trivia`].

use super::util::{InputSpan, Parser, Result};

pub mod error;
mod util;
pub use util::Token;

pub mod literal;
pub mod naming;
pub mod structure;
pub mod symbol;
