//! Reasons a model file could not be parsed

use pydream_it_ast::CallKind;

use crate::token::error::TokenErrorKind;

/// The reason for a parser error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorReason {
    /// An argument was expected, for example after a keyword's `=`
    ExpectArgument,
    /// The argument list of a model building call was never closed
    UnclosedCall {
        /// The kind of call that was opened
        kind: CallKind,
        /// The offset of the call's opening parenthesis
        open_paren_offset: usize,
    },
    /// A bracket inside an argument was never closed
    UnclosedBracket {
        /// The opening bracket character
        bracket: char,
        /// The offset of the opening bracket
        open_offset: usize,
    },
    /// A closing bracket did not match the innermost open bracket
    UnmatchedBracket {
        /// The closing bracket character that was found
        bracket: char,
    },
    /// An error from the token layer
    TokenError(TokenErrorKind),
}

impl ParserErrorReason {
    pub(crate) const fn expect_argument() -> Self {
        Self::ExpectArgument
    }

    pub(crate) const fn unclosed_call(kind: CallKind, open_paren_offset: usize) -> Self {
        Self::UnclosedCall {
            kind,
            open_paren_offset,
        }
    }

    pub(crate) const fn unclosed_bracket(bracket: char, open_offset: usize) -> Self {
        Self::UnclosedBracket {
            bracket,
            open_offset,
        }
    }

    pub(crate) const fn unmatched_bracket(bracket: char) -> Self {
        Self::UnmatchedBracket { bracket }
    }
}
