//! Intermediate representation of a PySB model for PyDREAM script generation
//!
//! Only the part of a model that matters for calibration is represented:
//! the reaction rules, in definition order, and the parameters used as their
//! forward and reverse rates.

#![warn(missing_docs)]

pub mod kinetic;
pub mod model;
pub mod parameter;
pub mod rule;

pub use kinetic::{KineticParameter, RateRole};
pub use model::Model;
pub use parameter::Parameter;
pub use rule::Rule;
