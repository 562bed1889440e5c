//! Sampling overrides and parameter resolution for the PyDREAM script
//! generator
//!
//! Model files carry directives in comments:
//!
//! ```text
//! #PYDREAM_IT prior kf uniform
//! #PYDREAM_IT no-sample kdeg
//! ```
//!
//! [`scan_directives`] folds them into [`Overrides`], and
//! [`resolve_parameters`] combines the overrides with the kinetic
//! parameters of the model into the list of parameters to sample.

#![warn(missing_docs)]

pub mod directive;
pub mod overrides;
pub mod prior;
pub mod resolve;

pub use directive::{
    Directive, DirectiveError, MARKER, Subcommand, apply_directive, parse_directive,
    scan_directives,
};
pub use overrides::Overrides;
pub use prior::{DEFAULT_PRIOR_SHAPE, PriorKind, PriorShape};
pub use resolve::{ResolvedParameter, resolve_parameters};
