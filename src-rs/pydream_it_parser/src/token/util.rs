use nom::{Parser as _, character::complete::space0, combinator::recognize};

use crate::{
    token::{
        InputSpan, Parser, Result,
        error::{ErrorHandlingParser, TokenError},
    },
    util::span_from,
};
use pydream_it_shared::span::Span;

/// A lexical element of the model source.
///
/// The lexeme span covers the token itself, without the trailing
/// whitespace that the token parser consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub lexeme_str: &'a str,
    pub lexeme_span: Span,
}

impl<'a> Token<'a> {
    /// Returns the text of the token
    #[must_use]
    pub const fn lexeme(&self) -> &'a str {
        self.lexeme_str
    }
}

/// Parses inline whitespace (spaces and tabs). Always succeeds.
pub fn inline_whitespace(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    space0.parse(input)
}

/// Wraps a parser so that it produces a `Token` and skips trailing whitespace.
///
/// `f` must be built from plain nom combinators; its nom errors are turned
/// into token errors by `convert_error`.
pub fn token<'a, O>(
    mut f: impl Parser<'a, O, TokenError>,
    convert_error: impl Fn(TokenError) -> TokenError,
) -> impl Parser<'a, Token<'a>, TokenError> {
    move |input| {
        let f = |input| (&mut f).parse(input);
        let convert_error = |error| (&convert_error)(error);

        let (rest, lexeme) = recognize(f).convert_error_to(convert_error).parse(input)?;

        let lexeme_str = *lexeme.fragment();
        let lexeme_span = span_from(lexeme, rest);

        let (rest, _whitespace) = inline_whitespace.parse(rest)?;

        Ok((
            rest,
            Token {
                lexeme_str,
                lexeme_span,
            },
        ))
    }
}
