use pydream_it_resolver::PriorShape;

/// Settings for a generated run script
///
/// The defaults produce the same script as running the generator without
/// any options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of DREAM chains, written as `nchains`
    pub nchains: u32,
    /// Number of iterations per chain, written as `niterations`
    pub niterations: u32,
    /// Prior shape for parameters that no directive gives one
    pub default_prior_shape: PriorShape,
    /// Prefix of the script file name
    pub output_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nchains: 5,
            niterations: 50_000,
            default_prior_shape: PriorShape::default(),
            output_prefix: "run_pydream_".to_string(),
        }
    }
}
