//! Import statements

use crate::{naming::IdentifierNode, node::Node};

/// An `import` or `from ... import` statement
#[derive(Debug, Clone, PartialEq)]
pub enum Import {
    /// `import pysb.macros` or `import pysb.macros as m`
    Module {
        module: String,
        alias: Option<IdentifierNode>,
    },
    /// `from pysb.macros import bind, degrade as deg`
    From { module: String, names: ImportedNames },
}

pub type ImportNode = Node<Import>;

/// The names a `from ... import` statement brings in
#[derive(Debug, Clone, PartialEq)]
pub enum ImportedNames {
    /// `*`
    Glob,
    List(Vec<ImportedName>),
}

/// One name of a `from ... import` statement, such as `degrade as deg`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedName {
    name: IdentifierNode,
    alias: Option<IdentifierNode>,
}

impl ImportedName {
    #[must_use]
    pub const fn new(name: IdentifierNode, alias: Option<IdentifierNode>) -> Self {
        Self { name, alias }
    }

    #[must_use]
    pub const fn name(&self) -> &IdentifierNode {
        &self.name
    }

    /// Returns the name the import binds in the importing module
    #[must_use]
    pub fn bound_name(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

impl Import {
    /// Returns the module being imported from
    #[must_use]
    pub fn module(&self) -> &str {
        match self {
            Self::Module { module, .. } | Self::From { module, .. } => module,
        }
    }
}
