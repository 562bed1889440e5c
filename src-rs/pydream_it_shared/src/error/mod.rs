//! Errors for the pydream_it script generator

mod context;
mod location;
mod traits;

use std::path::PathBuf;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsPydreamError;

/// Unified error representation for pydream_it
///
/// This struct represents errors in a format suitable for display to users.
/// It includes the file path where the error occurred, a human-readable
/// message, and optional source location information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PydreamError {
    path: PathBuf,
    message: String,
    location: Option<ErrorLocation>,
    context: Vec<Context>,
    context_with_source: Vec<(Context, ErrorLocation)>,
}

impl PydreamError {
    /// Creates a new `PydreamError` without source location information
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pydream_it_shared::error::{AsPydreamError, PydreamError};
    /// use std::path::PathBuf;
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsPydreamError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("model file is empty".to_string());
    /// let error = PydreamError::from_error(&error, PathBuf::from("model.py"));
    ///
    /// assert_eq!(error.message(), "model file is empty");
    /// assert!(error.location().is_none());
    /// ```
    pub fn from_error(error: &impl AsPydreamError, path: PathBuf) -> Self {
        Self {
            path,
            message: error.message(),
            location: None,
            context: error.context(),
            context_with_source: vec![],
        }
    }

    /// Creates a new `PydreamError`, using the source to compute locations
    ///
    /// Context items that carry a location are kept with it; the rest are
    /// merged into the plain context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pydream_it_shared::error::{AsPydreamError, ErrorLocation, PydreamError};
    /// use std::path::PathBuf;
    ///
    /// struct PositionalError {
    ///     offset: usize,
    /// }
    ///
    /// impl AsPydreamError for PositionalError {
    ///     fn message(&self) -> String {
    ///         "unexpected token".to_string()
    ///     }
    ///
    ///     fn error_location(&self, source: &str) -> Option<ErrorLocation> {
    ///         Some(ErrorLocation::from_source_and_offset(source, self.offset))
    ///     }
    /// }
    ///
    /// let source = "Model()\nRule(";
    /// let error = PydreamError::from_error_with_source(
    ///     &PositionalError { offset: 12 },
    ///     PathBuf::from("model.py"),
    ///     source,
    /// );
    ///
    /// assert_eq!(error.location().map(ErrorLocation::line), Some(2));
    /// ```
    pub fn from_error_with_source(
        error: &impl AsPydreamError,
        path: PathBuf,
        source: &str,
    ) -> Self {
        let message = error.message();
        let location = error.error_location(source);

        let mut context = error.context();
        let mut context_with_source = vec![];

        for (context_item, location) in error.context_with_source(source) {
            match location {
                Some(location) => context_with_source.push((context_item, location)),
                None => context.push(context_item),
            }
        }

        Self {
            path,
            message,
            location,
            context,
            context_with_source,
        }
    }

    /// Creates a new `PydreamError` with source locations when the source
    /// is available
    pub fn from_error_with_optional_source(
        error: &impl AsPydreamError,
        path: PathBuf,
        source: Option<&str>,
    ) -> Self {
        match source {
            Some(source) => Self::from_error_with_source(error, path, source),
            None => Self::from_error(error, path),
        }
    }

    /// Returns the path to the file where the error occurred
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location, if one is known
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the context items without a source location
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }

    /// Returns the context items that point at their own source location
    #[must_use]
    pub fn context_with_source(&self) -> &[(Context, ErrorLocation)] {
        &self.context_with_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RateError {
        rate_offset: usize,
        rule_offset: usize,
    }

    impl AsPydreamError for RateError {
        fn message(&self) -> String {
            "undefined rate parameter 'kf'".to_string()
        }

        fn context(&self) -> Vec<Context> {
            vec![Context::Help("declare it with `Parameter('kf', ...)`".to_string())]
        }

        fn error_location(&self, source: &str) -> Option<ErrorLocation> {
            Some(ErrorLocation::from_source_and_span(
                source,
                self.rate_offset,
                2,
            ))
        }

        fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
            vec![
                (
                    Context::Note("rule declared here".to_string()),
                    Some(ErrorLocation::from_source_and_offset(
                        source,
                        self.rule_offset,
                    )),
                ),
                (Context::Note("rates must be parameters".to_string()), None),
            ]
        }
    }

    #[test]
    fn with_source_splits_context() {
        let source = "Rule('r', A() >> B(), kf)";
        let error = RateError {
            rate_offset: 22,
            rule_offset: 0,
        };

        let error = PydreamError::from_error_with_source(&error, PathBuf::from("m.py"), source);

        assert_eq!(error.message(), "undefined rate parameter 'kf'");
        assert_eq!(error.location().map(ErrorLocation::column), Some(23));
        assert_eq!(error.context().len(), 2);
        assert_eq!(error.context_with_source().len(), 1);
    }

    #[test]
    fn without_source_has_no_location() {
        let error = RateError {
            rate_offset: 22,
            rule_offset: 0,
        };

        let error = PydreamError::from_error_with_optional_source(&error, PathBuf::from("m.py"), None);

        assert!(error.location().is_none());
        assert!(error.context_with_source().is_empty());
        assert_eq!(error.context().len(), 1);
        assert_eq!(error.path(), &PathBuf::from("m.py"));
    }
}
