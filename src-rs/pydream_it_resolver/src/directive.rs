//! `#PYDREAM_IT` directives
//!
//! A directive is a comment line whose first word is the marker:
//!
//! ```text
//! #PYDREAM_IT prior <name> <shape>
//! #PYDREAM_IT no-sample <name>
//! ```
//!
//! Words past the required ones are ignored, as are directives with an
//! unknown sub-command. A `prior` or `no-sample` directive that is missing
//! its arguments is an error.

use pydream_it_shared::error::{AsPydreamError, Context, ErrorLocation};

use crate::{overrides::Overrides, prior::PriorShape};

/// The word that starts a directive line
pub const MARKER: &str = "#PYDREAM_IT";

/// A parsed directive, borrowing from its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Sample `name` with a prior of the given shape
    Prior {
        /// The parameter name
        name: &'a str,
        /// The prior shape token
        shape: &'a str,
    },
    /// Do not sample `name`
    NoSample {
        /// The parameter name
        name: &'a str,
    },
    /// A directive with a sub-command that is not recognized
    Ignored {
        /// The unrecognized sub-command
        subcommand: &'a str,
    },
}

/// A sub-command that takes arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    /// `prior <name> <shape>`
    Prior,
    /// `no-sample <name>`
    NoSample,
}

impl Subcommand {
    /// Returns the sub-command as written in a directive.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prior => "prior",
            Self::NoSample => "no-sample",
        }
    }

    /// Returns the complete form of a directive with this sub-command.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Prior => "#PYDREAM_IT prior <name> <shape>",
            Self::NoSample => "#PYDREAM_IT no-sample <name>",
        }
    }
}

/// The arguments of a sub-command are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingArguments(pub Subcommand);

/// An error found while scanning a model file for directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    /// A directive is missing the arguments of its sub-command
    MalformedDirective {
        /// The sub-command of the directive
        subcommand: Subcommand,
        /// The line of the directive, starting at 1
        line_number: usize,
        /// The byte offset of the marker in the model source
        offset: usize,
        /// The length of the directive, in bytes
        length: usize,
    },
}

/// Returns the words of a line if it is a directive.
///
/// A directive line starts with the marker and has at least one more word.
/// Any other line, including a bare marker, is not a directive.
#[must_use]
pub fn directive_words(line: &str) -> Option<Vec<&str>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [marker, _, ..] if *marker == MARKER => Some(words),
        _ => None,
    }
}

/// Parses a directive line.
///
/// The line must already be known to be a directive line, as checked by
/// [`directive_words`].
///
/// # Errors
///
/// Returns an error if a `prior` or `no-sample` directive is missing its
/// arguments.
pub fn parse_directive(line: &str) -> Result<Directive<'_>, MissingArguments> {
    let mut words = line.split_whitespace().skip(1);
    let subcommand = words.next().unwrap_or_default();

    match subcommand {
        "prior" => match (words.next(), words.next()) {
            (Some(name), Some(shape)) => Ok(Directive::Prior { name, shape }),
            _ => Err(MissingArguments(Subcommand::Prior)),
        },
        "no-sample" => match words.next() {
            Some(name) => Ok(Directive::NoSample { name }),
            None => Err(MissingArguments(Subcommand::NoSample)),
        },
        _ => Ok(Directive::Ignored { subcommand }),
    }
}

/// Folds a directive into the overrides.
#[must_use]
pub fn apply_directive(overrides: Overrides, directive: Directive<'_>) -> Overrides {
    match directive {
        Directive::Prior { name, shape } => {
            overrides.with_prior(name.to_string(), PriorShape::from(shape))
        }
        Directive::NoSample { name } => overrides.with_exclusion(name.to_string()),
        Directive::Ignored { .. } => overrides,
    }
}

/// Scans the source of a model file for directives and folds them into
/// overrides, in line order.
///
/// # Errors
///
/// Returns the first malformed directive.
pub fn scan_directives(source: &str) -> Result<Overrides, DirectiveError> {
    let mut overrides = Overrides::new();
    let mut line_offset = 0;

    for (index, raw_line) in source.split_inclusive('\n').enumerate() {
        let line = raw_line.trim_end_matches(['\n', '\r']);

        if directive_words(line).is_some() {
            let directive = parse_directive(line).map_err(|MissingArguments(subcommand)| {
                let trimmed = line.trim();
                DirectiveError::MalformedDirective {
                    subcommand,
                    line_number: index + 1,
                    offset: line_offset + (line.len() - line.trim_start().len()),
                    length: trimmed.len(),
                }
            })?;
            overrides = apply_directive(overrides, directive);
        }

        line_offset += raw_line.len();
    }

    Ok(overrides)
}

impl AsPydreamError for DirectiveError {
    fn message(&self) -> String {
        match self {
            Self::MalformedDirective { subcommand, .. } => {
                format!("malformed `{}` directive", subcommand.as_str())
            }
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::MalformedDirective { subcommand, .. } => {
                let help = match subcommand {
                    Subcommand::Prior => "add the parameter name and the prior shape, such as `uniform`",
                    Subcommand::NoSample => "add the name of the parameter to leave out of sampling",
                };
                vec![
                    Context::Note(format!("expected `{}`", subcommand.usage())),
                    Context::Help(help.to_string()),
                ]
            }
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        match self {
            Self::MalformedDirective { offset, length, .. } => {
                let offset = (*offset).min(source.len());
                let length = (*length).min(source.len() - offset);
                Some(ErrorLocation::from_source_and_span(source, offset, length))
            }
        }
    }
}
