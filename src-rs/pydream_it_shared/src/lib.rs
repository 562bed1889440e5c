//! Shared utilities for the pydream_it workspace
//!
//! This crate holds the pieces every stage of the generator needs: source
//! spans for mapping parsed items back to the model file, and the unified
//! error representation used when reporting failures to the user.

pub mod error;
pub mod span;

pub use error::{AsPydreamError, Context, ErrorLocation, PydreamError};
