use clap::Parser;
use std::path::PathBuf;

/// Generate a PyDREAM run script from a PySB model
#[derive(Parser)]
#[command(name = "pydream_it")]
#[command(version, about = "PyDREAM run script generator for PySB models", long_about = None)]
pub struct CliCommand {
    /// Path to the PySB model file
    #[arg(value_name = "MODEL_FILE")]
    pub file: PathBuf,

    /// Number of DREAM chains in the generated script
    #[arg(long, default_value_t = 5)]
    pub nchains: u32,

    /// Number of iterations per chain in the generated script
    #[arg(long, default_value_t = 50_000)]
    pub niterations: u32,

    /// Load the model by importing it with Python instead of reading its source
    #[cfg(feature = "python")]
    #[arg(long)]
    pub python: bool,

    /// Print errors in debug format
    #[arg(long)]
    pub print_debug: bool,

    /// Disable colors in the output
    #[arg(long)]
    pub no_colors: bool,
}
