//! Model building calls

use crate::{argument::ArgumentNode, naming::IdentifierNode, node::Node};

/// The model building component a call creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// `Model(...)`
    Model,
    /// `Parameter(...)`
    Parameter,
    /// `Rule(...)`
    Rule,
    /// `Expression(...)`
    Expression,
}

impl CallKind {
    /// Maps the last segment of a callee path to the kind of call
    #[must_use]
    pub fn from_callee(name: &str) -> Option<Self> {
        match name {
            "Model" => Some(Self::Model),
            "Parameter" => Some(Self::Parameter),
            "Rule" => Some(Self::Rule),
            "Expression" => Some(Self::Expression),
            _ => None,
        }
    }

    /// Returns the callee name as written in PySB
    #[must_use]
    pub const fn callee(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Parameter => "Parameter",
            Self::Rule => "Rule",
            Self::Expression => "Expression",
        }
    }
}

/// A call such as `kf = Parameter('kf', 1e-3)`
///
/// The callee node spans the callee path (`Parameter`, or `pysb.Parameter`)
/// and the assignment target, if any, spans the variable name.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    assigned_to: Option<IdentifierNode>,
    callee: Node<CallKind>,
    arguments: Vec<ArgumentNode>,
}

pub type CallNode = Node<Call>;

impl Call {
    #[must_use]
    pub const fn new(
        assigned_to: Option<IdentifierNode>,
        callee: Node<CallKind>,
        arguments: Vec<ArgumentNode>,
    ) -> Self {
        Self {
            assigned_to,
            callee,
            arguments,
        }
    }

    #[must_use]
    pub const fn assigned_to(&self) -> Option<&IdentifierNode> {
        self.assigned_to.as_ref()
    }

    #[must_use]
    pub fn kind(&self) -> CallKind {
        *self.callee.node_value()
    }

    #[must_use]
    pub const fn callee(&self) -> &Node<CallKind> {
        &self.callee
    }

    #[must_use]
    pub fn arguments(&self) -> &[ArgumentNode] {
        &self.arguments
    }

    /// Finds an argument by keyword, falling back to its position
    ///
    /// Positional arguments are counted among the arguments that precede the
    /// first keyword argument, as in Python.
    #[must_use]
    pub fn argument(&self, position: usize, keyword: &str) -> Option<&ArgumentNode> {
        self.arguments
            .iter()
            .find(|argument| argument.has_keyword(keyword))
            .or_else(|| {
                self.arguments
                    .iter()
                    .take_while(|argument| argument.keyword().is_none())
                    .nth(position)
            })
    }
}
