use nom::{IResult, Parser as NomParser, error::Error};
use nom_locate::LocatedSpan;
use pydream_it_shared::span::{SourceLocation, Span};

use super::config::Config;

/// A span of text in the input string.
///
/// The span carries both the text and the parser configuration, and tracks
/// the offset, line, and column of the text within the whole model file.
pub type InputSpan<'a> = LocatedSpan<&'a str, Config>;

/// Returns the position of the start of `input_span` in the model file.
pub fn source_location_from(input_span: InputSpan<'_>) -> SourceLocation {
    SourceLocation {
        offset: input_span.location_offset(),
        line: input_span.location_line() as usize,
        column: input_span.get_utf8_column(),
    }
}

pub fn span_from(start_input_span: InputSpan<'_>, end_input_span: InputSpan<'_>) -> Span {
    Span::new(
        source_location_from(start_input_span),
        source_location_from(end_input_span),
    )
}

/// A result type for parser operations.
pub type Result<'a, O, E = Error<InputSpan<'a>>> = IResult<InputSpan<'a>, O, E>;

/// A trait for parsers over [`InputSpan`].
///
/// This is implemented for every nom parser with the right input type; it
/// only shortens the signatures of parser-returning functions.
pub trait Parser<'a, O, E = Error<InputSpan<'a>>>:
    NomParser<InputSpan<'a>, Output = O, Error = E>
{
}

impl<'a, O, E, P> Parser<'a, O, E> for P where P: NomParser<InputSpan<'a>, Output = O, Error = E> {}
