//! Core types shared across the vellum code-generation layer.
//!
//! This crate provides the error type used by every emission stage and the
//! opaque module identifier that external references and import resolution
//! are keyed on.

mod error;
mod module_id;

pub use error::{Error, Result};
pub use module_id::ModuleId;
