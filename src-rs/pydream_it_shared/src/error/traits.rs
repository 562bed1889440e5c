use crate::error::{Context, ErrorLocation};

/// Trait for errors that can be reported through [`PydreamError`](super::PydreamError).
///
/// Every stage of the generator (model parsing, model loading, directive
/// scanning, script writing) has its own error type. Implementing this
/// trait is what lets the CLI render all of them the same way.
pub trait AsPydreamError {
    /// Returns the primary error message.
    ///
    /// The message should be short and lowercase, in the style of
    /// `undefined rate parameter 'kf'`.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the error in the model source.
    ///
    /// Errors that do not originate from a particular place in the source
    /// (an unreadable file, a failed python import) keep the default.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }

    /// Returns context items that refer to their own source locations.
    ///
    /// Items whose location is `None` are rendered like plain context.
    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        let _ = source;
        vec![]
    }
}
