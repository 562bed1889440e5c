use std::path::PathBuf;

use pydream_it_shared::error::{AsPydreamError, Context};

/// An error that occurred while writing a run script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The model path has no file name to derive the module and script from
    InvalidModelPath(PathBuf),
    /// The script could not be written
    Write {
        /// The path of the script
        path: PathBuf,
        /// The reason reported by the operating system
        reason: String,
    },
}

impl AsPydreamError for ScriptError {
    fn message(&self) -> String {
        match self {
            Self::InvalidModelPath(path) => {
                format!("cannot derive a module name from '{}'", path.display())
            }
            Self::Write { path, reason } => {
                format!("failed to write run script '{}': {reason}", path.display())
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::InvalidModelPath(_) => vec![Context::Help(
                "pass the path of a `.py` model file".to_string(),
            )],
            Self::Write { .. } => vec![],
        }
    }
}
