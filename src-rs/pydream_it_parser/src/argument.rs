//! Parser for the argument list of a model building call

use nom::{
    Input, Parser as _,
    bytes::complete::take_while1,
    character::complete::{anychar, one_of},
    combinator::{all_consuming, opt},
};
use pydream_it_ast::{
    ArgValue, Argument, CallKind, Node,
    argument::{ArgValueNode, ArgumentNode},
    naming::{Identifier, IdentifierNode},
};

use crate::{
    error::{ErrorHandlingParser, ParserError, reason::ParserErrorReason},
    token::{
        Token,
        literal::{self, number_value, string_contents},
        naming::identifier,
        structure::{trivia, trivia1},
        symbol::{comma, equals, paren_right},
    },
    util::{InputSpan, Result, span_from},
};

/// Characters that end a run of ordinary expression text
const SPECIAL_CHARS: &str = ",()[]{}'\"#";

/// Parses the arguments of a call, from just after its opening parenthesis
/// through the closing one.
///
/// Arguments are separated by top-level commas and a trailing comma is
/// allowed. Anything inside nested brackets or strings belongs to the
/// enclosing argument.
pub fn parse_arguments<'a>(
    kind: CallKind,
    open_paren: Token<'a>,
    input: InputSpan<'a>,
) -> Result<'a, Vec<ArgumentNode>, ParserError> {
    let unclosed_call = |input: InputSpan<'_>| {
        nom::Err::Failure(ParserError::new(
            ParserErrorReason::unclosed_call(kind, open_paren.lexeme_span.start().offset),
            input,
        ))
    };

    let mut arguments = vec![];
    let (mut rest, ()) = trivia.convert_errors().parse(input)?;

    loop {
        if let Ok((rest, _)) = paren_right(rest) {
            return Ok((rest, arguments));
        }

        if rest.fragment().is_empty() {
            return Err(unclosed_call(rest));
        }

        let (after_argument, argument) = argument
            .or_fail_with(ParserError::expect_argument)
            .parse(rest)?;
        arguments.push(argument);

        let (after_argument, ()) = trivia.convert_errors().parse(after_argument)?;

        if let Ok((after_comma, _)) = comma(after_argument) {
            let (after_comma, ()) = trivia.convert_errors().parse(after_comma)?;
            rest = after_comma;
            continue;
        }

        if let Ok((after_paren, _)) = paren_right(after_argument) {
            return Ok((after_paren, arguments));
        }

        return match after_argument.fragment().chars().next() {
            None => Err(unclosed_call(after_argument)),
            Some(bracket) => Err(nom::Err::Failure(ParserError::new(
                ParserErrorReason::unmatched_bracket(bracket),
                after_argument,
            ))),
        };
    }
}

/// Parses a single argument, optionally preceded by `keyword =`.
fn argument(input: InputSpan<'_>) -> Result<'_, ArgumentNode, ParserError> {
    let (rest, keyword) = opt(keyword).parse(input)?;
    let (rest, value) = match keyword {
        Some(_) => arg_value
            .or_fail_with(ParserError::expect_argument)
            .parse(rest)?,
        None => arg_value(rest)?,
    };

    let span = span_from(input, rest);
    Ok((rest, Node::new(Argument::new(keyword, value), span)))
}

/// Parses `name =`, where `=` is not the start of `==`.
fn keyword(input: InputSpan<'_>) -> Result<'_, IdentifierNode, ParserError> {
    let (rest, name) = identifier.convert_errors().parse(input)?;
    let (rest, ()) = trivia.convert_errors().parse(rest)?;
    let (rest, _) = equals.convert_errors().parse(rest)?;
    let (rest, ()) = trivia.convert_errors().parse(rest)?;

    let name_node = Node::new(Identifier::new(name.lexeme().to_string()), name.lexeme_span);
    Ok((rest, name_node))
}

/// Parses the text of an argument value and classifies it.
///
/// The returned input is positioned right after the last meaningful piece
/// of the value, before any trailing whitespace or comments.
fn arg_value(input: InputSpan<'_>) -> Result<'_, ArgValueNode, ParserError> {
    let mut rest = input;
    let mut end = None;

    loop {
        if let Ok((after_trivia, ())) = trivia1(rest) {
            // trivia inside a value only counts if more of the value follows
            rest = after_trivia;
            continue;
        }

        match expression_piece(rest) {
            Ok((after_piece, ())) => {
                rest = after_piece;
                end = Some(after_piece);
            }
            Err(nom::Err::Error(_)) => break,
            Err(error) => return Err(error),
        }
    }

    let Some(end) = end else {
        return Err(nom::Err::Error(ParserError::new(
            ParserErrorReason::expect_argument(),
            input,
        )));
    };

    let length = end.location_offset() - input.location_offset();
    let text = input.take(length);
    let value = classify(text);

    Ok((end, Node::new(value, span_from(input, end))))
}

/// Parses one piece of an expression: a string, a bracketed group, or a run
/// of ordinary characters.
fn expression_piece(input: InputSpan<'_>) -> Result<'_, (), ParserError> {
    if let (rest, Some(())) = skip_string(input)? {
        return Ok((rest, ()));
    }

    if let Ok((rest, open)) = one_of::<_, _, ParserError>("([{").parse(input) {
        return bracketed_group(open, input, rest);
    }

    let (rest, _) =
        take_while1::<_, _, ParserError>(|c: char| !c.is_whitespace() && !SPECIAL_CHARS.contains(c))
            .parse(input)?;
    Ok((rest, ()))
}

/// Skips a string literal if the input starts with one.
///
/// Produces `None` when there is no string, and a failure when the
/// string is not closed.
fn skip_string(input: InputSpan<'_>) -> Result<'_, Option<()>, ParserError> {
    match literal::string(input) {
        Ok((rest, _)) => Ok((rest, Some(()))),
        Err(nom::Err::Error(_)) => Ok((input, None)),
        Err(nom::Err::Failure(error)) => Err(nom::Err::Failure(error.into())),
        Err(nom::Err::Incomplete(needed)) => Err(nom::Err::Incomplete(needed)),
    }
}

/// Parses the rest of a bracketed group after its opening bracket.
///
/// Inside a group, commas and newlines are part of the expression.
fn bracketed_group<'a>(
    open: char,
    open_input: InputSpan<'a>,
    input: InputSpan<'a>,
) -> Result<'a, (), ParserError> {
    let close = match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    };

    let mut rest = input;
    loop {
        if let Ok((after_trivia, ())) = trivia1(rest) {
            rest = after_trivia;
            continue;
        }

        let Some(next) = rest.fragment().chars().next() else {
            return Err(nom::Err::Failure(ParserError::new(
                ParserErrorReason::unclosed_bracket(open, open_input.location_offset()),
                rest,
            )));
        };

        match next {
            c if c == close => {
                let (after_close, _) = anychar::<_, ParserError>(rest)?;
                return Ok((after_close, ()));
            }
            ')' | ']' | '}' => {
                return Err(nom::Err::Failure(ParserError::new(
                    ParserErrorReason::unmatched_bracket(next),
                    rest,
                )));
            }
            ',' => {
                let (after_char, _) = anychar::<_, ParserError>(rest)?;
                rest = after_char;
            }
            _ => {
                let (after_piece, ()) = expression_piece(rest)?;
                rest = after_piece;
            }
        }
    }
}

/// Classifies the complete text of an argument value.
fn classify(text: InputSpan<'_>) -> ArgValue {
    let fragment = *text.fragment();

    if fragment == "None" {
        return ArgValue::None;
    }

    if let Ok((_, name)) = all_consuming(identifier).parse(text) {
        return ArgValue::Identifier(name.lexeme().to_string());
    }

    if let Ok((_, number)) = all_consuming(literal::number).parse(text) {
        if let Some(value) = number_value(number.lexeme()) {
            return ArgValue::Number(value);
        }
    }

    if let Ok((_, string)) = all_consuming(literal::string).parse(text) {
        return ArgValue::String(string_contents(string.lexeme()).to_string());
    }

    ArgValue::Other(fragment.to_string())
}
