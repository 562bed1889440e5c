//! Sampling overrides collected from directives

use indexmap::{IndexMap, IndexSet};

use crate::prior::PriorShape;

/// Prior shapes and exclusions requested by directives
///
/// Overrides are built by folding directives, one at a time, into a value
/// that is passed along by ownership. Setting the prior of a parameter
/// again replaces the earlier shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overrides {
    priors: IndexMap<String, PriorShape>,
    excluded: IndexSet<String>,
}

impl Overrides {
    /// Creates empty overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the overrides with the prior of `name` set to `shape`.
    #[must_use]
    pub fn with_prior(mut self, name: String, shape: PriorShape) -> Self {
        self.priors.insert(name, shape);
        self
    }

    /// Returns the overrides with `name` excluded from sampling.
    #[must_use]
    pub fn with_exclusion(mut self, name: String) -> Self {
        self.excluded.insert(name);
        self
    }

    /// Returns the prior shape of `name`, if one is set.
    #[must_use]
    pub fn prior(&self, name: &str) -> Option<&PriorShape> {
        self.priors.get(name)
    }

    /// Returns `true` if `name` is excluded from sampling.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(name)
    }

    /// Returns every prior shape, in the order the names were first set.
    #[must_use]
    pub const fn priors(&self) -> &IndexMap<String, PriorShape> {
        &self.priors
    }

    /// Returns the excluded names, in the order they were first excluded.
    #[must_use]
    pub const fn excluded(&self) -> &IndexSet<String> {
        &self.excluded
    }
}
