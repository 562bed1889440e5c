//! Parser for a single model building call, such as
//! `kf = Parameter('kf', 1e-3)` or `pysb.Rule('deg', A() >> None, kdeg)`

use nom::{Parser as _, combinator::opt, multi::many0};
use pydream_it_ast::{
    CallKind, Node,
    call::{Call, CallNode},
    naming::{Identifier, IdentifierNode},
};
use pydream_it_shared::span::Span;

use crate::{
    argument::parse_arguments,
    error::{ErrorHandlingParser, ParserError},
    token::{
        Token,
        error::{ExpectKind, TokenError},
        naming::identifier,
        symbol::{dot, equals, paren_left},
    },
    util::{InputSpan, Result, span_from},
};

/// Parses a model building call.
///
/// Returns a recoverable error if the input is not a call to one of the
/// recognized callees. Once the opening parenthesis has been seen, errors in
/// the argument list are failures.
pub fn parse(input: InputSpan<'_>) -> Result<'_, CallNode, ParserError> {
    let (rest, assigned_to) = opt(assignment).parse(input)?;
    let (rest, callee) = callee.parse(rest)?;
    let (rest, open_paren) = paren_left.convert_errors().parse(rest)?;
    let (rest, arguments) = parse_arguments(*callee.node_value(), open_paren, rest)?;

    let span = span_from(input, rest);
    let call = Call::new(assigned_to, callee, arguments);

    Ok((rest, Node::new(call, span)))
}

/// Parses `name =` in front of a call.
fn assignment(input: InputSpan<'_>) -> Result<'_, IdentifierNode, ParserError> {
    let (rest, name) = identifier.convert_errors().parse(input)?;
    let (rest, _) = equals.convert_errors().parse(rest)?;

    Ok((rest, identifier_node(name)))
}

/// Parses a possibly dotted callee path and checks its last segment.
fn callee(input: InputSpan<'_>) -> Result<'_, Node<CallKind>, ParserError> {
    let (rest, first) = identifier.convert_errors().parse(input)?;
    let (rest, others) = many0(|input| {
        let (rest, _) = dot(input)?;
        identifier(rest)
    })
    .convert_errors()
    .parse(rest)?;

    let last = others.last().unwrap_or(&first);
    let Some(kind) = CallKind::from_callee(last.lexeme()) else {
        return Err(nom::Err::Error(ParserError::from(TokenError::expected_at(
            ExpectKind::Identifier,
            input,
        ))));
    };

    let span = Span::new(*first.lexeme_span.start(), *last.lexeme_span.end());
    Ok((rest, Node::new(kind, span)))
}

pub fn identifier_node(token: Token<'_>) -> IdentifierNode {
    Node::new(
        Identifier::new(token.lexeme().to_string()),
        token.lexeme_span,
    )
}

#[cfg(test)]
mod tests {
    use pydream_it_ast::ArgValue;

    use super::*;
    use crate::{Config, error::reason::ParserErrorReason};

    fn parse_call(source: &str) -> CallNode {
        let input = InputSpan::new_extra(source, Config::default());
        let (_, call) = parse(input).expect("should parse call");
        call
    }

    #[test]
    fn assigned_parameter() {
        let call = parse_call("kf = Parameter('kf', 1.0e-3)");

        assert_eq!(call.kind(), CallKind::Parameter);
        let assigned_to = call.assigned_to().expect("call is assigned");
        assert_eq!(assigned_to.as_str(), "kf");
        assert_eq!(call.arguments().len(), 2);
        assert_eq!(call.span().start().offset, 0);
        assert_eq!(call.span().end().offset, 28);
    }

    #[test]
    fn bare_rule() {
        let call = parse_call("Rule('deg', A() >> None, kdeg)");

        assert_eq!(call.kind(), CallKind::Rule);
        assert!(call.assigned_to().is_none());
        let rate = call.argument(2, "rate_forward").expect("forward rate");
        assert_eq!(**rate.value(), ArgValue::Identifier("kdeg".to_string()));
    }

    #[test]
    fn dotted_callee() {
        let call = parse_call("pysb.core.Model()");

        assert_eq!(call.kind(), CallKind::Model);
        assert_eq!(call.callee().span().start().offset, 0);
        assert_eq!(call.callee().span().end().offset, 15);
    }

    #[test]
    fn space_before_paren() {
        let call = parse_call("Model ()");
        assert_eq!(call.kind(), CallKind::Model);
    }

    #[test]
    fn other_callee_is_not_a_call() {
        let input = InputSpan::new_extra("Monomer('A', ['b'])", Config::default());
        let Err(nom::Err::Error(_)) = parse(input) else {
            panic!("Monomer is not a recognized call");
        };
    }

    #[test]
    fn callee_without_parens_is_not_a_call() {
        let input = InputSpan::new_extra("Rule = None", Config::default());
        let Err(nom::Err::Error(_)) = parse(input) else {
            panic!("a bare name is not a call");
        };
    }

    #[test]
    fn unclosed_call_is_a_failure() {
        let input = InputSpan::new_extra("x = Rule('r', A() >> B(), k", Config::default());
        let Err(nom::Err::Failure(error)) = parse(input) else {
            panic!("expected an unclosed call failure");
        };
        assert_eq!(
            error.reason,
            ParserErrorReason::UnclosedCall {
                kind: CallKind::Rule,
                open_paren_offset: 8,
            }
        );
    }
}
