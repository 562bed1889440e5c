use std::{io::Error as IoError, path::Path};

use pydream_it_shared::error::{AsPydreamError, Context};

/// The model file could not be read
#[derive(Debug)]
pub struct ReadError {
    reason: String,
    is_not_found: bool,
}

impl ReadError {
    pub fn new(error: &IoError) -> Self {
        Self {
            reason: error.to_string(),
            is_not_found: error.kind() == std::io::ErrorKind::NotFound,
        }
    }
}

impl AsPydreamError for ReadError {
    fn message(&self) -> String {
        format!("couldn't read model file - {}", self.reason)
    }

    fn context(&self) -> Vec<Context> {
        if self.is_not_found {
            vec![Context::Help(
                "pass the path of the PySB model file, such as `models/egfr.py`".to_string(),
            )]
        } else {
            vec![]
        }
    }
}

/// Reads the model source.
pub fn read_model_source(path: &Path) -> Result<String, ReadError> {
    std::fs::read_to_string(path).map_err(|error| ReadError::new(&error))
}
