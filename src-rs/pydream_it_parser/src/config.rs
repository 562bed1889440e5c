/// Configuration for the PySB model parser.
///
/// The parser currently has no tunable behavior. The type exists so that
/// options (for example, accepting Python 2 string prefixes) can be added
/// without changing every entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {}

impl Config {
    /// Creates a new configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
