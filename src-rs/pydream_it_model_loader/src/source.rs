use std::path::Path;

use pydream_it_ir::Model;
use pydream_it_parser::{Config, parse_model_source};

use crate::{ModelLoader, error::LoadError, resolve::resolve_model};

/// Loads a model by reading its source, without running Python.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLoader {
    config: Config,
}

impl ModelLoader for SourceLoader {
    type Error = LoadError;

    fn load_model(&self, _path: &Path, source: &str) -> Result<Model, Self::Error> {
        let model_source = parse_model_source(source, Some(self.config))?;
        resolve_model(&model_source)
    }
}
