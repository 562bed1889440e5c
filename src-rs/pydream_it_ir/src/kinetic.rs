//! Kinetic parameters discovered from the rules of a model

use crate::parameter::Parameter;

/// The direction of a rule that a rate parameter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateRole {
    /// The parameter is the forward rate of its rule
    Forward,
    /// The parameter is the reverse rate of its rule
    Reverse,
}

/// A rate parameter of a rule, candidate for sampling
#[derive(Debug, Clone, PartialEq)]
pub struct KineticParameter {
    name: String,
    value: f64,
    role: RateRole,
}

impl KineticParameter {
    /// Creates a new kinetic parameter.
    #[must_use]
    pub const fn new(name: String, value: f64, role: RateRole) -> Self {
        Self { name, value, role }
    }

    /// Creates a kinetic parameter from a rule's rate parameter.
    #[must_use]
    pub fn from_parameter(parameter: &Parameter, role: RateRole) -> Self {
        Self::new(parameter.name().to_string(), parameter.value(), role)
    }

    /// Returns the name of the parameter.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal value of the parameter.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns the direction of the rule this parameter is a rate of.
    #[must_use]
    pub const fn role(&self) -> RateRole {
        self.role
    }
}
