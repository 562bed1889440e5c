//! Parsers for Python number and string literals.

use nom::{
    Input, Parser as _,
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, digit1, one_of},
    combinator::{opt, recognize},
    error::{ErrorKind, ParseError},
    multi::many0,
};

use crate::token::{
    InputSpan, Parser, Result,
    error::{ErrorHandlingParser, TokenError},
    util::{Token, token},
};

/// Parses a run of digits, allowing single underscores between them.
fn digits(input: InputSpan<'_>) -> Result<'_, InputSpan<'_>, TokenError> {
    recognize((digit1, many0((char('_'), digit1)))).parse(input)
}

/// Parses a number literal, with optional sign, fraction, and exponent.
///
/// Accepted forms include `42`, `-17`, `1_000`, `3.14`, `1.`, `.5`,
/// `2.5e10`, and `1E-3`. After removing underscores, every accepted lexeme
/// is valid input for `f64::from_str`.
pub fn number(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    let opt_sign = opt(one_of("+-"));

    // "1", "1.", "1.5", or ".5"
    let mantissa = alt((
        recognize((digits, opt((char('.'), opt(digits))))),
        recognize((char('.'), digits)),
    ));

    let opt_exponent = opt(|input| -> Result<'_, _, TokenError> {
        let (rest, e_span) = tag::<_, _, TokenError>("e").or(tag("E")).parse(input)?;
        let (rest, _) = opt(one_of::<_, _, TokenError>("+-")).parse(rest)?;
        let (rest, _) = digits
            .or_fail_with(TokenError::invalid_exponent_part(e_span))
            .parse(rest)?;
        Ok((rest, ()))
    });

    token((opt_sign, mantissa, opt_exponent), TokenError::expected_number).parse(input)
}

/// Converts a lexeme accepted by [`number`] into its value.
#[must_use]
pub fn number_value(lexeme: &str) -> Option<f64> {
    lexeme.replace('_', "").parse::<f64>().ok()
}

/// Parses the body of a string up to and including the closing delimiter.
fn string_body<'a>(delimiter: &'a str) -> impl Parser<'a, (), TokenError> {
    move |input: InputSpan<'a>| {
        let text = *input.fragment();
        let is_triple_quoted = delimiter.len() == 3;

        let mut chars = text.char_indices();
        while let Some((index, c)) = chars.next() {
            if c == '\\' {
                // the escaped character, which may be a quote or a newline
                chars.next();
                continue;
            }

            if c == '\n' && !is_triple_quoted {
                break;
            }

            if text[index..].starts_with(delimiter) {
                let (rest, _body) = input.take_split(index + delimiter.len());
                return Ok((rest, ()));
            }
        }

        Err(nom::Err::Error(TokenError::from_error_kind(
            input,
            ErrorKind::Char,
        )))
    }
}

/// Parses a string literal.
///
/// Single (`'`, `"`) and triple (`'''`, `"""`) quoted strings are accepted,
/// with up to two prefix letters such as `r` or `u`. Backslash escapes are
/// skipped, not interpreted. A single-quoted string must close on the line
/// it opens on.
pub fn string(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        |input| {
            let (rest, _prefix) =
                take_while_m_n::<_, _, TokenError>(0, 2, |c: char| "rRuUbBfF".contains(c))
                    .parse(input)?;
            let (rest, open_quote) = alt((
                tag::<_, _, TokenError>("'''"),
                tag("\"\"\""),
                tag("'"),
                tag("\""),
            ))
            .parse(rest)?;
            let delimiter = *open_quote.fragment();
            let (rest, ()) = string_body(delimiter)
                .or_fail_with(TokenError::unclosed_string(open_quote))
                .parse(rest)?;
            Ok((rest, ()))
        },
        TokenError::expected_string,
    )
    .parse(input)
}

/// Returns the contents of a string lexeme accepted by [`string`], without
/// its prefix and quotes.
#[must_use]
pub fn string_contents(lexeme: &str) -> &str {
    let unprefixed = lexeme.trim_start_matches(|c: char| "rRuUbBfF".contains(c));

    ["'''", "\"\"\"", "'", "\""]
        .iter()
        .find_map(|delimiter| {
            unprefixed
                .strip_prefix(delimiter)
                .and_then(|rest| rest.strip_suffix(delimiter))
        })
        .unwrap_or(unprefixed)
}
