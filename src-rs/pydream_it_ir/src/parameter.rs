//! Model parameters

/// A named numeric parameter of a model, such as a rate constant
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    value: f64,
}

impl Parameter {
    /// Creates a new parameter.
    #[must_use]
    pub const fn new(name: String, value: f64) -> Self {
        Self { name, value }
    }

    /// Returns the name of the parameter, as given to `Parameter(...)`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal value of the parameter.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}
