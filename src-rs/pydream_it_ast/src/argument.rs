//! Call arguments

use crate::{naming::IdentifierNode, node::Node};

/// A single argument of a model building call
///
/// `Rule('bind', A() + B() | AB(), kf, rate_reverse=kr)` has four arguments,
/// the last one with the keyword `rate_reverse`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    keyword: Option<IdentifierNode>,
    value: ArgValueNode,
}

pub type ArgumentNode = Node<Argument>;

impl Argument {
    #[must_use]
    pub const fn new(keyword: Option<IdentifierNode>, value: ArgValueNode) -> Self {
        Self { keyword, value }
    }

    #[must_use]
    pub const fn keyword(&self) -> Option<&IdentifierNode> {
        self.keyword.as_ref()
    }

    #[must_use]
    pub const fn value(&self) -> &ArgValueNode {
        &self.value
    }

    /// Returns `true` if this argument is passed by keyword `name`
    #[must_use]
    pub fn has_keyword(&self, name: &str) -> bool {
        self.keyword
            .as_ref()
            .is_some_and(|keyword| keyword.as_str() == name)
    }
}

/// The value of an argument, classified as far as the generator cares
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// A string literal, without its quotes
    String(String),
    /// A numeric literal, possibly signed
    Number(f64),
    /// A bare identifier, usually a reference to a parameter
    Identifier(String),
    /// The `None` keyword
    None,
    /// Any other Python expression, kept as source text
    Other(String),
}

pub type ArgValueNode = Node<ArgValue>;

impl ArgValue {
    /// Returns a short description of the kind of value, for error messages
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::String(_) => "a string",
            Self::Number(_) => "a number",
            Self::Identifier(_) => "an identifier",
            Self::None => "`None`",
            Self::Other(_) => "an expression",
        }
    }
}
