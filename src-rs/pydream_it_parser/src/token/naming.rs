//! Parsers for Python names.

use nom::{
    Parser as _,
    bytes::complete::take_while,
    character::complete::satisfy,
    combinator::verify,
};

use crate::token::{
    InputSpan, Result,
    error::TokenError,
    util::{Token, token},
};

/// Python keywords that can never be used as identifiers.
///
/// `None`, `True`, and `False` are included: they are values, not names.
pub const KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

/// Parses a word: a letter or underscore followed by letters, digits, or
/// underscores. Keywords are words too.
pub fn word(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    token(
        |input| {
            let (rest, _) = satisfy::<_, _, TokenError>(|c: char| c.is_alphabetic() || c == '_')
                .parse(input)?;
            let (rest, _) =
                take_while::<_, _, TokenError>(|c: char| c.is_alphanumeric() || c == '_')
                    .parse(rest)?;
            Ok((rest, ()))
        },
        TokenError::expected_identifier,
    )
    .parse(input)
}

/// Parses an identifier, which is any word that is not a keyword.
pub fn identifier(input: InputSpan<'_>) -> Result<'_, Token<'_>, TokenError> {
    verify(word, |word: &Token<'_>| !KEYWORDS.contains(&word.lexeme())).parse(input)
}
