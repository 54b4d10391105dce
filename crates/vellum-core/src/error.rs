//! Error types and result aliases for the vellum emitters.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the vellum code-generation layer.
///
/// Every failure aborts the current module's emission; no emitter ever
/// returns partially rendered source text.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// An external reference carried no symbol name. This is a defect in the
    /// stage that built the statement tree, not a user-facing condition.
    #[error("malformed external reference: missing symbol name")]
    #[diagnostic(
        code(vellum::emit::malformed_reference),
        help("the statement tree handed to the emitter is ill-formed")
    )]
    MalformedReference,

    #[error("cannot resolve import from '{from}' to '{to}': {reason}")]
    #[diagnostic(code(vellum::emit::unresolved_import))]
    UnresolvedImport {
        from: String,
        to: String,
        reason: String,
    },

    #[error("emission error: {0}")]
    #[diagnostic(code(vellum::emit::render))]
    Emit(String),
}

/// Result type alias using the vellum Error type.
pub type Result<T> = std::result::Result<T, Error>;
