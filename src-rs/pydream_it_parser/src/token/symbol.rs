//! Parsers for punctuation.

use nom::{
    Parser as _,
    character::complete::{char, satisfy},
    combinator::{eof, peek, value},
};

use crate::token::{
    InputSpan, Parser, Result,
    error::{ExpectSymbol, TokenError},
    util::{Token, token},
};

/// Creates a parser that succeeds when the next character is not `c`.
///
/// Used so that `=` does not match the first half of `==`.
fn next_char_is_not<'a>(c: char) -> impl Parser<'a, (), TokenError> {
    let next_char_is_not_c = peek(satisfy(move |next_char: char| next_char != c)).map(|_| ());
    let reached_end_of_file = eof.map(|_| ());
    let mut parser = value((), next_char_is_not_c.or(reached_end_of_file));

    move |input: InputSpan<'a>| parser.parse(input)
}

/// Parses the ',' symbol token.
pub fn comma(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char(','), TokenError::expected_symbol(ExpectSymbol::Comma)).parse(input)
}

/// Parses the '.' symbol token.
pub fn dot(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('.'), TokenError::expected_symbol(ExpectSymbol::Dot)).parse(input)
}

/// Parses the '=' symbol token, but not '=='.
pub fn equals(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        (char('='), next_char_is_not('=')),
        TokenError::expected_symbol(ExpectSymbol::Equals),
    )
    .parse(input)
}

/// Parses the '(' symbol token.
pub fn paren_left(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(char('('), TokenError::expected_symbol(ExpectSymbol::ParenLeft)).parse(input)
}

/// Parses the ')' symbol token.
pub fn paren_right(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        char(')'),
        TokenError::expected_symbol(ExpectSymbol::ParenRight),
    )
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Config,
        token::error::{ExpectKind, TokenErrorKind},
    };

    #[test]
    fn equals_single() {
        let input = InputSpan::new_extra("= 1.0", Config::default());
        let (rest, matched) = equals(input).expect("should parse '='");
        assert_eq!(matched.lexeme(), "=");
        assert_eq!(rest.fragment(), &"1.0");
    }

    #[test]
    fn equals_rejects_double() {
        let input = InputSpan::new_extra("== 1.0", Config::default());
        let Err(nom::Err::Error(error)) = equals(input) else {
            panic!("'==' should not parse as '='");
        };
        assert_eq!(
            error.kind,
            TokenErrorKind::Expect(ExpectKind::Symbol(ExpectSymbol::Equals))
        );
    }

    #[test]
    fn equals_at_end_of_file() {
        let input = InputSpan::new_extra("=", Config::default());
        let (rest, _) = equals(input).expect("should parse '=' at end of file");
        assert_eq!(rest.fragment(), &"");
    }

    #[test]
    fn parens_and_comma() {
        let input = InputSpan::new_extra("( , )", Config::default());
        let (rest, _) = paren_left(input).expect("should parse '('");
        let (rest, _) = comma(rest).expect("should parse ','");
        let (rest, _) = paren_right(rest).expect("should parse ')'");
        assert_eq!(rest.fragment(), &"");
    }

    #[test]
    fn dot_token() {
        let input = InputSpan::new_extra(".Rule", Config::default());
        let (rest, _) = dot(input).expect("should parse '.'");
        assert_eq!(rest.fragment(), &"Rule");
    }
}
