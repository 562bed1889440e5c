//! Parsers for the parts of the source that carry no meaning for the model:
//! whitespace, line continuations, and comments.

use nom::{
    Parser as _,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, line_ending, multispace1, not_line_ending},
    combinator::{recognize, value},
    multi::{many0, many1},
};

use crate::token::{InputSpan, Result, error::TokenError};

/// Parses a comment, from `#` up to (not including) the end of the line.
pub fn comment(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize((char('#'), not_line_ending)).parse(input)
}

/// Parses a backslash line continuation.
fn line_continuation(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize((tag("\\"), line_ending)).parse(input)
}

/// Parses one piece of trivia: whitespace (including newlines), a line
/// continuation, or a comment.
fn trivia_piece(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    value((), alt((multispace1, line_continuation, comment))).parse(input)
}

/// Skips any amount of trivia. Always succeeds.
///
/// Within the brackets of a call Python ignores newlines, so this is used
/// between the elements of an argument list.
pub fn trivia(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    value((), many0(trivia_piece)).parse(input)
}

/// Skips at least one piece of trivia.
pub fn trivia1(input: InputSpan<'_>) -> Result<'_, (), TokenError> {
    value((), many1(trivia_piece)).parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn comment_stops_before_newline() {
        let input = InputSpan::new_extra("# a comment\nModel()", Config::default());
        let (rest, matched) = comment(input).expect("should parse comment");
        assert_eq!(matched.fragment(), &"# a comment");
        assert_eq!(rest.fragment(), &"\nModel()");
    }

    #[test]
    fn comment_at_end_of_file() {
        let input = InputSpan::new_extra("#PYDREAM_IT no-sample k1", Config::default());
        let (rest, _) = comment(input).expect("should parse comment");
        assert_eq!(rest.fragment(), &"");
    }

    #[test]
    fn trivia_mixes_whitespace_and_comments() {
        let input = InputSpan::new_extra(
            "  \n  # first\n\t# second\r\n  kf",
            Config::default(),
        );
        let (rest, ()) = trivia(input).expect("should skip trivia");
        assert_eq!(rest.fragment(), &"kf");
    }

    #[test]
    fn trivia_skips_line_continuation() {
        let input = InputSpan::new_extra("\\\n    kr", Config::default());
        let (rest, ()) = trivia(input).expect("should skip continuation");
        assert_eq!(rest.fragment(), &"kr");
    }

    #[test]
    fn trivia_accepts_nothing() {
        let input = InputSpan::new_extra("kf", Config::default());
        let (rest, ()) = trivia(input).expect("trivia always succeeds");
        assert_eq!(rest.fragment(), &"kf");
    }

    #[test]
    #[expect(
        clippy::assertions_on_result_states,
        reason = "we don't care about the result, just that it's an error"
    )]
    fn trivia1_requires_something() {
        let input = InputSpan::new_extra("kf", Config::default());
        assert!(trivia1(input).is_err());
    }
}
