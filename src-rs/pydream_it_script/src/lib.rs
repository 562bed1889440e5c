//! PyDREAM run script generation
//!
//! The generated script imports the model, sets up a PySB solver, declares
//! a `SampledParam` for every resolved parameter, and runs DREAM(ZS). The
//! user still has to load their data and fill in the likelihood function.

#![warn(missing_docs)]

mod config;
mod error;
mod render;

use std::path::{Path, PathBuf};

pub use config::Config;
pub use error::ScriptError;
pub use render::{python_float, render_script};

/// Returns the name of the Python module defined by a model file.
///
/// # Errors
///
/// Returns an error if the path has no file stem that is valid UTF-8.
pub fn module_name(model_path: &Path) -> Result<String, ScriptError> {
    model_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ScriptError::InvalidModelPath(model_path.to_path_buf()))
}

/// Returns the path of the run script for a model file.
///
/// The script is written next to the model, named after it with the
/// configured prefix: `models/egfr.py` becomes `models/run_pydream_egfr.py`.
///
/// # Errors
///
/// Returns an error if the path has no file name that is valid UTF-8.
pub fn output_path(model_path: &Path, config: &Config) -> Result<PathBuf, ScriptError> {
    let file_name = model_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ScriptError::InvalidModelPath(model_path.to_path_buf()))?;

    let script_name = format!("{}{file_name}", config.output_prefix);
    Ok(model_path.with_file_name(script_name))
}

/// Writes a rendered script to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_script(path: &Path, script: &str) -> Result<(), ScriptError> {
    std::fs::write(path, script).map_err(|error| ScriptError::Write {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_next_to_model() {
        let path = output_path(Path::new("models/egfr.py"), &Config::default())
            .expect("valid model path");
        assert_eq!(path, PathBuf::from("models/run_pydream_egfr.py"));
    }

    #[test]
    fn output_path_in_current_directory() {
        let path =
            output_path(Path::new("egfr.py"), &Config::default()).expect("valid model path");
        assert_eq!(path, PathBuf::from("run_pydream_egfr.py"));
    }

    #[test]
    fn output_path_with_custom_prefix() {
        let config = Config {
            output_prefix: "calibrate_".to_string(),
            ..Config::default()
        };
        let path = output_path(Path::new("egfr.py"), &config).expect("valid model path");
        assert_eq!(path, PathBuf::from("calibrate_egfr.py"));
    }

    #[test]
    fn module_name_is_file_stem() {
        assert_eq!(
            module_name(Path::new("models/egfr.py")),
            Ok("egfr".to_string())
        );
        assert_eq!(
            module_name(Path::new("..")),
            Err(ScriptError::InvalidModelPath(PathBuf::from("..")))
        );
    }
}
