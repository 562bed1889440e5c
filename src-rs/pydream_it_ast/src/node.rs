//! AST node wrapper with source location information

use std::ops::Deref;

use pydream_it_shared::span::Span;

/// A wrapper around AST elements that includes source location information
#[derive(Debug, Clone, PartialEq)]
pub struct Node<T> {
    value: Box<T>,
    span: Span,
}

impl<T> Node<T> {
    /// Creates a new node with the given span and value
    #[must_use]
    pub fn new(value: T, span: Span) -> Self {
        let value = Box::new(value);
        Self { value, span }
    }

    /// Returns the span of the source text this node was parsed from
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns a reference to the wrapped value
    #[must_use]
    pub fn node_value(&self) -> &T {
        &self.value
    }

    /// Consumes the node and returns its value
    #[must_use]
    pub fn take_value(self) -> T {
        *self.value
    }
}

impl<T> Deref for Node<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
