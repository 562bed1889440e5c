#![allow(missing_docs)]
// AST nodes should be self-documenting

//! Abstract Syntax Tree (AST) definitions for PySB model files.
//!
//! The parser does not understand Python. It only recognizes the model
//! building calls (`Model(...)`, `Parameter(...)`, `Rule(...)`,
//! `Expression(...)`) and keeps their arguments in the shape defined here.
//! Imports and the names passed to any other call are kept too, so that
//! rules created some other way can be noticed.

pub mod argument;
pub mod call;
pub mod import;
pub mod model;
pub mod naming;
pub mod node;
pub mod other_call;

pub use argument::{ArgValue, Argument};
pub use call::{Call, CallKind};
pub use import::{Import, ImportedName, ImportedNames};
pub use model::ModelSource;
pub use naming::Identifier;
pub use node::Node;
pub use other_call::OtherCall;
