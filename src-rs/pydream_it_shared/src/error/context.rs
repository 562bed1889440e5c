/// Extra information attached to an error message.
///
/// A context item is rendered below the main error line. It either explains
/// the error further or tells the user how to fix it.
///
/// # Examples
///
/// ```rust
/// use pydream_it_shared::error::Context;
///
/// let note = Context::Note("directives have the form `#PYDREAM_IT prior <name> <shape>`".to_string());
/// let help = Context::Help("add the prior shape, for example `uniform`".to_string());
///
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information about the error.
    ///
    /// Notes point at related locations or describe the state the generator
    /// was in when the error occurred.
    Note(String),

    /// A suggestion for resolving the error.
    Help(String),
}
