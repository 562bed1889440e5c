//! Parser for calls to anything other than a model building callee

use nom::{Parser as _, character::complete::anychar, multi::many0};
use pydream_it_ast::{
    Node,
    naming::IdentifierNode,
    other_call::{OtherCall, OtherCallNode},
};
use pydream_it_shared::span::Span;

use crate::{
    call::{self, identifier_node},
    error::{ErrorHandlingParser, ParserError},
    token::{
        error::{ExpectKind, ExpectSymbol, TokenError},
        literal::{number, string},
        naming::{KEYWORDS, identifier, word},
        structure::trivia1,
        symbol::{dot, equals, paren_left},
    },
    util::{InputSpan, Result, span_from},
};

/// Parses the callee of a call and collects the names used in its
/// arguments.
///
/// Only the callee is consumed: the returned input is at the opening
/// parenthesis, so that model building calls nested in the arguments are
/// still found by the caller. A call whose parenthesis is never closed is
/// a recoverable error.
pub fn parse(input: InputSpan<'_>) -> Result<'_, OtherCallNode, ParserError> {
    let (rest, first) = identifier.convert_errors().parse(input)?;
    let (rest, others) = many0(|input| {
        let (rest, _) = dot(input)?;
        identifier(rest)
    })
    .convert_errors()
    .parse(rest)?;

    let (after_paren, _) = paren_left.convert_errors().parse(rest)?;
    let Some(references) = argument_references(after_paren) else {
        return Err(nom::Err::Error(ParserError::from(TokenError::expected_at(
            ExpectKind::Symbol(ExpectSymbol::ParenRight),
            after_paren,
        ))));
    };

    let last = others.last().unwrap_or(&first);
    let callee_span = Span::new(*first.lexeme_span.start(), *last.lexeme_span.end());
    let callee = Node::new(input.fragment()[..callee_span.len()].to_string(), callee_span);

    let span = span_from(input, rest);
    Ok((rest, Node::new(OtherCall::new(callee, references), span)))
}

/// Collects the names used between an opening parenthesis and the one that
/// closes it.
///
/// Returns `None` if the parenthesis is not closed or the arguments contain
/// an unclosed string or call.
fn argument_references(input: InputSpan<'_>) -> Option<Vec<IdentifierNode>> {
    let mut references = vec![];
    let mut depth = 1_usize;
    let mut after_dot = false;
    let mut rest = input;

    loop {
        if let Ok((after_trivia, ())) = trivia1(rest) {
            rest = after_trivia;
            continue;
        }

        match string(rest) {
            Ok((after_string, _)) => {
                rest = after_string;
                after_dot = false;
                continue;
            }
            Err(nom::Err::Error(_)) => (),
            Err(_) => return None,
        }

        match call::parse(rest) {
            Ok((after_call, _)) => {
                rest = after_call;
                after_dot = false;
                continue;
            }
            Err(nom::Err::Error(_)) => (),
            Err(_) => return None,
        }

        if let Ok((after_number, _)) = number(rest) {
            rest = after_number;
            after_dot = false;
            continue;
        }

        if let Ok((after_word, name)) = word(rest) {
            let is_keyword_argument = equals(after_word).is_ok();
            if !after_dot && !is_keyword_argument && !KEYWORDS.contains(&name.lexeme()) {
                references.push(identifier_node(name));
            }
            rest = after_word;
            after_dot = false;
            continue;
        }

        let (after_char, next) = anychar::<_, TokenError>(rest).ok()?;
        match next {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(references);
                }
            }
            _ => (),
        }
        after_dot = next == '.';
        rest = after_char;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn parse_other(source: &str) -> (InputSpan<'_>, OtherCallNode) {
        let input = InputSpan::new_extra(source, Config::default());
        parse(input).expect("should parse call")
    }

    fn names(call: &OtherCall) -> Vec<&str> {
        call.references()
            .iter()
            .map(|reference| reference.as_str())
            .collect()
    }

    #[test]
    fn macro_with_rate_list() {
        let (rest, call) = parse_other("bind(A(), 'b', B(), 'a', [kf, kr])");

        assert_eq!(call.callee().as_str(), "bind");
        assert_eq!(names(&call), vec!["A", "B", "kf", "kr"]);
        assert_eq!(rest.fragment(), &"(A(), 'b', B(), 'a', [kf, kr])");
    }

    #[test]
    fn dotted_callee() {
        let (_, call) = parse_other("pysb.macros.degrade(A(), 'b', kdeg)");

        assert_eq!(call.callee().as_str(), "pysb.macros.degrade");
        assert_eq!(call.callee_name(), "degrade");
        assert_eq!(call.callee().span().end().offset, 19);
        assert_eq!(names(&call), vec!["A", "kdeg"]);
    }

    #[test]
    fn keyword_names_attributes_and_literals_are_not_references() {
        let (_, call) = parse_other("f(x, k=2, y.kf, 1e-3, 'kr', None, z == 1)");
        assert_eq!(names(&call), vec!["x", "y", "z"]);
    }

    #[test]
    fn arguments_of_model_building_calls_are_skipped() {
        let (_, call) = parse_other("register(Rule('r', A() >> None, kdeg), kf)");
        assert_eq!(names(&call), vec!["kf"]);
    }

    #[test]
    fn multi_line_arguments() {
        let (_, call) = parse_other("catalyze(E(), 'b',  # enzyme\n         S(), 'b', P(),\n         klist)");
        assert_eq!(names(&call), vec!["E", "S", "P", "klist"]);
    }

    #[test]
    fn unclosed_call_is_recoverable() {
        let input = InputSpan::new_extra("bind(A(), kf", Config::default());
        let Err(nom::Err::Error(_)) = parse(input) else {
            panic!("an unclosed call is not a call");
        };
    }

    #[test]
    fn keywords_are_not_callees() {
        let input = InputSpan::new_extra("if (kf > 0):", Config::default());
        let Err(nom::Err::Error(_)) = parse(input) else {
            panic!("`if` is not a callee");
        };
    }
}
