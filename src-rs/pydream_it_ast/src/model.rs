//! The parsed model file

use crate::{call::CallNode, import::ImportNode, other_call::OtherCallNode};

/// What the reader found in a model file, each in source order
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSource {
    calls: Vec<CallNode>,
    other_calls: Vec<OtherCallNode>,
    imports: Vec<ImportNode>,
}

impl ModelSource {
    #[must_use]
    pub const fn new(
        calls: Vec<CallNode>,
        other_calls: Vec<OtherCallNode>,
        imports: Vec<ImportNode>,
    ) -> Self {
        Self {
            calls,
            other_calls,
            imports,
        }
    }

    /// Returns the model building calls
    #[must_use]
    pub fn calls(&self) -> &[CallNode] {
        &self.calls
    }

    /// Returns every other call, including calls nested in other code
    #[must_use]
    pub fn other_calls(&self) -> &[OtherCallNode] {
        &self.other_calls
    }

    #[must_use]
    pub fn imports(&self) -> &[ImportNode] {
        &self.imports
    }
}
