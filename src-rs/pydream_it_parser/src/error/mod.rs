//! Error handling for the PySB model parser.

use pydream_it_shared::error::{AsPydreamError, Context, ErrorLocation};

use crate::{
    InputSpan,
    token::error::{ExpectKind, ExpectSymbol, IncompleteKind, TokenError, TokenErrorKind},
};

pub mod reason;
use reason::ParserErrorReason;

mod parser_trait;
pub use parser_trait::ErrorHandlingParser;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserError {
    /// The location in the source where the error occurred
    pub error_offset: usize,
    /// The reason for the error
    pub reason: ParserErrorReason,
}

impl ParserError {
    /// Creates a new `ParserError` at the given input
    pub(crate) fn new(reason: ParserErrorReason, input: InputSpan<'_>) -> Self {
        Self {
            error_offset: input.location_offset(),
            reason,
        }
    }

    /// Creates a new `ParserError` for an expected argument
    pub(crate) fn expect_argument(error: Self) -> Self {
        Self {
            reason: ParserErrorReason::expect_argument(),
            ..error
        }
    }
}

impl From<TokenError> for ParserError {
    fn from(error: TokenError) -> Self {
        Self {
            error_offset: error.offset,
            reason: ParserErrorReason::TokenError(error.kind),
        }
    }
}

impl<'a> nom::error::ParseError<InputSpan<'a>> for ParserError {
    fn from_error_kind(input: InputSpan<'a>, kind: nom::error::ErrorKind) -> Self {
        Self {
            error_offset: input.location_offset(),
            reason: ParserErrorReason::TokenError(TokenErrorKind::NomError(kind)),
        }
    }

    fn append(_input: InputSpan<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

const fn describe_expected(kind: ExpectKind) -> &'static str {
    match kind {
        ExpectKind::Identifier => "an identifier",
        ExpectKind::Number => "a number",
        ExpectKind::String => "a string",
        ExpectKind::Symbol(ExpectSymbol::Comma) => "`,`",
        ExpectKind::Symbol(ExpectSymbol::Dot) => "`.`",
        ExpectKind::Symbol(ExpectSymbol::Equals) => "`=`",
        ExpectKind::Symbol(ExpectSymbol::ParenLeft) => "`(`",
        ExpectKind::Symbol(ExpectSymbol::ParenRight) => "`)`",
    }
}

const fn closing_bracket(open: char) -> char {
    match open {
        '[' => ']',
        '{' => '}',
        _ => ')',
    }
}

/// Clamps an offset so that it can be used as an error location
fn location_at(source: &str, offset: usize) -> ErrorLocation {
    ErrorLocation::from_source_and_offset(source, offset.min(source.len()))
}

impl AsPydreamError for ParserError {
    fn message(&self) -> String {
        match self.reason {
            ParserErrorReason::ExpectArgument => "expected an argument".to_string(),
            ParserErrorReason::UnclosedCall { kind, .. } => {
                format!("unclosed `{}(...)` call", kind.callee())
            }
            ParserErrorReason::UnclosedBracket { bracket, .. } => {
                format!("unclosed `{bracket}`")
            }
            ParserErrorReason::UnmatchedBracket { bracket } => {
                format!("unexpected closing `{bracket}`")
            }
            ParserErrorReason::TokenError(TokenErrorKind::Expect(kind)) => {
                format!("expected {}", describe_expected(kind))
            }
            ParserErrorReason::TokenError(TokenErrorKind::Incomplete(
                IncompleteKind::UnclosedString { .. },
            )) => "unclosed string".to_string(),
            ParserErrorReason::TokenError(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidExponentPart { .. },
            )) => "invalid exponent in number literal".to_string(),
            ParserErrorReason::TokenError(TokenErrorKind::NomError(_)) => {
                "unexpected character".to_string()
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self.reason {
            ParserErrorReason::ExpectArgument => vec![Context::Note(
                "arguments are separated by `,` and keyword arguments have the form `name=value`"
                    .to_string(),
            )],
            ParserErrorReason::UnclosedCall { .. } => {
                vec![Context::Help("add a closing `)`".to_string())]
            }
            ParserErrorReason::UnclosedBracket { bracket, .. } => vec![Context::Help(format!(
                "add a closing `{}`",
                closing_bracket(bracket)
            ))],
            ParserErrorReason::TokenError(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidExponentPart { .. },
            )) => vec![Context::Note(
                "an exponent must have digits, as in `1e-3`".to_string(),
            )],
            ParserErrorReason::UnmatchedBracket { .. } | ParserErrorReason::TokenError(_) => {
                vec![]
            }
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        Some(location_at(source, self.error_offset))
    }

    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        match self.reason {
            ParserErrorReason::UnclosedCall {
                open_paren_offset, ..
            } => vec![(
                Context::Note("call opened here".to_string()),
                Some(location_at(source, open_paren_offset)),
            )],
            ParserErrorReason::UnclosedBracket { open_offset, .. } => vec![(
                Context::Note("bracket opened here".to_string()),
                Some(location_at(source, open_offset)),
            )],
            ParserErrorReason::TokenError(TokenErrorKind::Incomplete(
                IncompleteKind::UnclosedString {
                    open_quote_offset,
                    delimiter_length,
                },
            )) => vec![(
                Context::Note("string opened here".to_string()),
                Some(ErrorLocation::from_source_and_span(
                    source,
                    open_quote_offset,
                    delimiter_length,
                )),
            )],
            ParserErrorReason::ExpectArgument
            | ParserErrorReason::UnmatchedBracket { .. }
            | ParserErrorReason::TokenError(_) => vec![],
        }
    }
}
