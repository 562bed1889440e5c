//! Calls that the reader does not model

use crate::{naming::IdentifierNode, node::Node};

/// A call to anything other than a model building callee
///
/// Only the names used in the arguments are kept, so that a call like
/// `bind(A(), 'b', B(), 'a', [kf, kr])` can be seen to use `kf` and `kr`.
/// Names after a `.`, keyword argument names, and the arguments of nested
/// model building calls are not included.
#[derive(Debug, Clone, PartialEq)]
pub struct OtherCall {
    callee: Node<String>,
    references: Vec<IdentifierNode>,
}

pub type OtherCallNode = Node<OtherCall>;

impl OtherCall {
    #[must_use]
    pub const fn new(callee: Node<String>, references: Vec<IdentifierNode>) -> Self {
        Self { callee, references }
    }

    /// Returns the callee path as written, such as `macros.bind`
    #[must_use]
    pub const fn callee(&self) -> &Node<String> {
        &self.callee
    }

    /// Returns the last segment of the callee path
    #[must_use]
    pub fn callee_name(&self) -> &str {
        self.callee
            .rsplit_once('.')
            .map_or(self.callee.as_str(), |(_, name)| name)
    }

    #[must_use]
    pub fn references(&self) -> &[IdentifierNode] {
        &self.references
    }
}
