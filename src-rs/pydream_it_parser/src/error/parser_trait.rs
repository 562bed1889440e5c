use nom::{Parser, error::ParseError};

/// Error conversion helpers for nom parsers.
///
/// nom distinguishes recoverable errors (`nom::Err::Error`, "this
/// alternative does not apply") from unrecoverable ones
/// (`nom::Err::Failure`, "this is the right alternative, and it is broken").
/// These methods convert between error types while keeping that distinction.
pub trait ErrorHandlingParser<I, O, E>: Parser<I, Output = O, Error = E>
where
    E: ParseError<I>,
{
    /// Converts recoverable errors with `convert_error`; unrecoverable
    /// errors go through `From`.
    ///
    /// ```ignore
    /// let parser = identifier.convert_error_to(ParserError::expect_argument);
    /// ```
    fn convert_error_to<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Turns recoverable errors into unrecoverable ones, converting them
    /// with `convert_error`.
    ///
    /// Used once a parser has seen enough input to know that it must
    /// succeed, such as after the opening quote of a string.
    fn or_fail_with<E2>(
        mut self,
        convert_error: impl Fn(E) -> E2,
    ) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Failure(convert_error(e)),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }

    /// Converts both kinds of errors with `From`.
    fn convert_errors<E2>(mut self) -> impl Parser<I, Output = O, Error = E2>
    where
        Self: Sized,
        E2: ParseError<I> + From<E>,
    {
        move |input| {
            self.parse(input).map_err(|e| match e {
                nom::Err::Error(e) => nom::Err::Error(e.into()),
                nom::Err::Failure(e) => nom::Err::Failure(e.into()),
                nom::Err::Incomplete(e) => nom::Err::Incomplete(e),
            })
        }
    }
}

impl<I, O, E, P> ErrorHandlingParser<I, O, E> for P
where
    P: Parser<I, Output = O, Error = E>,
    E: ParseError<I>,
{
}
