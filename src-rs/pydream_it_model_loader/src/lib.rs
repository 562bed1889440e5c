//! Model loading for the PyDREAM script generator
//!
//! A [`ModelLoader`] turns a PySB model file into a [`Model`]: the ordered
//! reaction rules with their forward and reverse rate parameters.
//!
//! The [`SourceLoader`] reads the model source statically. It finds the
//! `Model(...)`, `Parameter(...)`, `Rule(...)`, and `Expression(...)` calls
//! and resolves each rule's rate arguments to the parameters they name.
//! Models that build their rules with macros need a loader that runs
//! Python instead, and the source loader refuses them rather than
//! returning a model with rules missing.

#![warn(missing_docs)]

use std::path::Path;

use pydream_it_ir::Model;
use pydream_it_shared::error::AsPydreamError;

mod error;
mod other_call;
mod resolve;
mod source;

pub use error::LoadError;
pub use source::SourceLoader;

/// Trait for loading a model from a PySB model file.
///
/// The source text is passed alongside the path so that loaders that only
/// read the file do not need to read it again, and so that errors can point
/// into it.
pub trait ModelLoader {
    /// The error type returned when the model cannot be loaded.
    type Error: AsPydreamError + std::fmt::Debug;

    /// Loads the model defined by the file at `path`, whose contents are
    /// `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be loaded.
    fn load_model(&self, path: &Path, source: &str) -> Result<Model, Self::Error>;
}
