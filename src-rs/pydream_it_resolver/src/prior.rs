//! Prior distribution shapes

use std::fmt;

/// The shape token used for parameters that no directive mentions
pub const DEFAULT_PRIOR_SHAPE: &str = "normal";

/// The prior shape token of a parameter, as written in a directive
///
/// Tokens are not validated. Any token other than `uniform` is emitted as a
/// normal prior.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PriorShape(String);

/// The distribution a prior shape is emitted as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorKind {
    /// `SampledParam(norm, ...)`
    Normal,
    /// `SampledParam(uniform, ...)`
    Uniform,
}

impl PriorShape {
    /// Creates a prior shape from its token.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// Returns the token as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the distribution this shape is emitted as.
    #[must_use]
    pub fn kind(&self) -> PriorKind {
        if self.0 == "uniform" {
            PriorKind::Uniform
        } else {
            PriorKind::Normal
        }
    }
}

impl Default for PriorShape {
    fn default() -> Self {
        Self(DEFAULT_PRIOR_SHAPE.to_string())
    }
}

impl From<&str> for PriorShape {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for PriorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
