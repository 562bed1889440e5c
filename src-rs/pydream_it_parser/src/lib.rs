//! Static reader for PySB model files
//!
//! The parser does not evaluate Python. It scans a model file for the model
//! building calls (`Model`, `Parameter`, `Rule`, and `Expression`) and parses
//! their argument lists, skipping everything else.

use pydream_it_ast::ModelSource;

mod config;
pub mod error;
mod token;

mod util;
use util::{InputSpan, Result as InternalResult};

mod argument;
mod call;
mod import;
mod model;
mod other_call;

pub use config::Config;

/// Parses the model building calls of a PySB model file.
///
/// # Errors
///
/// Returns an error if a recognized call is not closed, or if the file
/// contains an unclosed string or bracket.
pub fn parse_model_source(
    input: &str,
    config: Option<Config>,
) -> Result<ModelSource, error::ParserError> {
    parse(input, config, model::parse_complete)
}

/// Internal parsing function that handles the common parsing logic.
fn parse<T, E>(
    input: &str,
    config: Option<Config>,
    parser: impl Fn(InputSpan<'_>) -> InternalResult<'_, T, E>,
) -> Result<T, E> {
    let config = config.unwrap_or_default();
    let input = InputSpan::new_extra(input, config);
    let result = parser(input);

    match result {
        Ok((_rest, ast)) => Ok(ast),
        Err(nom::Err::Incomplete(_needed)) => unreachable!(
            "This should never happen because we use `complete` combinators rather than `stream` combinators"
        ),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
    }
}
