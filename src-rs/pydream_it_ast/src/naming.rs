//! Identifiers for the AST

use crate::node::Node;

/// A Python identifier, such as a variable or keyword argument name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

/// A node containing an identifier
pub type IdentifierNode = Node<Identifier>;

impl Identifier {
    /// Creates a new identifier with the given string value
    #[must_use]
    pub const fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
