//! Reaction rules

use crate::parameter::Parameter;

/// A reaction rule with its rate parameters
///
/// A unidirectional rule has only a forward rate. A reversible rule has
/// both. Some rules, such as those whose rate is given by an expression in
/// the python loader, may have neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    name: String,
    forward_rate: Option<Parameter>,
    reverse_rate: Option<Parameter>,
}

impl Rule {
    /// Creates a new rule.
    #[must_use]
    pub const fn new(
        name: String,
        forward_rate: Option<Parameter>,
        reverse_rate: Option<Parameter>,
    ) -> Self {
        Self {
            name,
            forward_rate,
            reverse_rate,
        }
    }

    /// Returns the name of the rule.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the forward rate parameter, if the rule has one.
    #[must_use]
    pub const fn forward_rate(&self) -> Option<&Parameter> {
        self.forward_rate.as_ref()
    }

    /// Returns the reverse rate parameter, if the rule has one.
    #[must_use]
    pub const fn reverse_rate(&self) -> Option<&Parameter> {
        self.reverse_rate.as_ref()
    }
}
