//! Error handling for token parsing

use nom::error::ParseError;

use crate::InputSpan;

pub use crate::error::ErrorHandlingParser;

/// An error that occurred during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenError {
    /// The specific kind of error that occurred
    pub kind: TokenErrorKind,
    /// The offset in the source where the error occurred
    pub offset: usize,
}

/// The different kinds of errors that can occur during token parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorKind {
    /// Expected a specific token
    Expect(ExpectKind),
    /// Incomplete input
    Incomplete(IncompleteKind),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

/// The different kinds of tokens that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectKind {
    /// Expected an identifier
    Identifier,
    /// Expected a number
    Number,
    /// Expected a string
    String,
    /// Expected a symbol
    Symbol(ExpectSymbol),
}

/// The different symbols that could have been expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectSymbol {
    /// Expected ',' symbol
    Comma,
    /// Expected '.' symbol
    Dot,
    /// Expected '=' symbol
    Equals,
    /// Expected '(' symbol
    ParenLeft,
    /// Expected ')' symbol
    ParenRight,
}

/// The different kinds of incomplete input that could have been found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteKind {
    /// Unclosed string
    UnclosedString {
        /// The offset of the opening quote
        open_quote_offset: usize,
        /// The length of the opening delimiter (1, or 3 for triple quotes)
        delimiter_length: usize,
    },
    /// Invalid exponent part in a number
    InvalidExponentPart {
        /// The offset of the exponent 'e' character
        e_offset: usize,
    },
}

impl TokenError {
    fn new(kind: TokenErrorKind, span: InputSpan<'_>) -> Self {
        Self {
            kind,
            offset: span.location_offset(),
        }
    }

    /// Updates the error kind
    ///
    /// Only nom errors may be updated. Any other error means a `token`
    /// parser was nested inside another one.
    fn update_kind(self, kind: TokenErrorKind) -> Self {
        let is_nom_error = matches!(self.kind, TokenErrorKind::NomError(_));
        assert!(
            is_nom_error,
            "Cannot update an error that is not a nom error! (attempting to update the kind {:?})",
            self.kind
        );

        Self { kind, ..self }
    }

    /// Creates a new `TokenError` instance for an expected identifier
    pub fn expected_identifier(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Identifier))
    }

    /// Creates a new `TokenError` instance for an expected number
    pub fn expected_number(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::Number))
    }

    /// Creates a new `TokenError` instance for an expected string
    pub fn expected_string(error: Self) -> Self {
        error.update_kind(TokenErrorKind::Expect(ExpectKind::String))
    }

    /// Creates a new `TokenError` instance for an expected symbol
    pub fn expected_symbol(symbol: ExpectSymbol) -> impl Fn(Self) -> Self {
        move |error: Self| error.update_kind(TokenErrorKind::Expect(ExpectKind::Symbol(symbol)))
    }

    /// Creates a new `TokenError` instance for an unclosed string
    pub fn unclosed_string(open_quote_span: InputSpan<'_>) -> impl Fn(Self) -> Self {
        move |error: Self| {
            let open_quote_offset = open_quote_span.location_offset();
            let delimiter_length = open_quote_span.fragment().len();
            error.update_kind(TokenErrorKind::Incomplete(IncompleteKind::UnclosedString {
                open_quote_offset,
                delimiter_length,
            }))
        }
    }

    /// Creates a new `TokenError` instance for an invalid exponent part in a number
    pub fn invalid_exponent_part(e_span: InputSpan<'_>) -> impl Fn(Self) -> Self {
        move |error: Self| {
            let e_offset = e_span.location_offset();
            error.update_kind(TokenErrorKind::Incomplete(
                IncompleteKind::InvalidExponentPart { e_offset },
            ))
        }
    }

    /// Creates a new `TokenError` instance for an expected token at the given input
    pub fn expected_at(kind: ExpectKind, input: InputSpan<'_>) -> Self {
        Self::new(TokenErrorKind::Expect(kind), input)
    }
}

impl ParseError<InputSpan<'_>> for TokenError {
    fn from_error_kind(input: InputSpan<'_>, kind: nom::error::ErrorKind) -> Self {
        Self::new(TokenErrorKind::NomError(kind), input)
    }

    fn append(_input: InputSpan<'_>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> From<nom::error::Error<InputSpan<'a>>> for TokenError {
    fn from(e: nom::error::Error<InputSpan<'a>>) -> Self {
        Self::from_error_kind(e.input, e.code)
    }
}
