//! Scanner for the model building calls of a complete model file

use nom::{Parser as _, character::complete::anychar};
use pydream_it_ast::{
    ModelSource, call::CallNode, import::ImportNode, other_call::OtherCallNode,
};

use crate::{
    call,
    error::{ErrorHandlingParser, ParserError},
    import, other_call,
    token::{literal::string, naming::word, structure::trivia1},
    util::{InputSpan, Result},
};

/// Scans a model file for model building calls.
///
/// Comments and strings are skipped whole, so a call inside either is never
/// found. The names that follow `def` and `class` are skipped too, so a
/// definition such as `def Rule(...)` is not mistaken for a call.
///
/// Imports and every other call are collected alongside. The arguments of
/// another call are scanned like the rest of the file, so a model building
/// call nested in one is still found.
pub fn parse_complete(input: InputSpan<'_>) -> Result<'_, ModelSource, ParserError> {
    let mut calls: Vec<CallNode> = vec![];
    let mut other_calls: Vec<OtherCallNode> = vec![];
    let mut imports: Vec<ImportNode> = vec![];
    let mut rest = input;

    while !rest.fragment().is_empty() {
        if let Ok((after_trivia, ())) = trivia1(rest) {
            rest = after_trivia;
            continue;
        }

        match string.convert_errors().parse(rest) {
            Ok((after_string, _)) => {
                rest = after_string;
                continue;
            }
            Err(nom::Err::Error(_)) => (),
            Err(error) => return Err(error),
        }

        if let Ok((after_import, statement)) = import::parse(rest) {
            imports.extend(statement);
            rest = after_import;
            continue;
        }

        match call::parse(rest) {
            Ok((after_call, call)) => {
                calls.push(call);
                rest = after_call;
                continue;
            }
            Err(nom::Err::Error(_)) => (),
            Err(error) => return Err(error),
        }

        if let Ok((at_arguments, other_call)) = other_call::parse(rest) {
            other_calls.push(other_call);
            rest = at_arguments;
            continue;
        }

        if let Ok((after_word, keyword)) = word(rest) {
            rest = after_word;
            if matches!(keyword.lexeme(), "def" | "class")
                && let Ok((after_name, _)) = word(rest)
            {
                rest = after_name;
            }
            continue;
        }

        let (after_char, _) = anychar::<_, ParserError>(rest)?;
        rest = after_char;
    }

    Ok((rest, ModelSource::new(calls, other_calls, imports)))
}
