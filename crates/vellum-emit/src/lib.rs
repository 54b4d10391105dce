//! Source-text emission for the vellum output AST.
//!
//! This crate turns a statement tree (see `vellum-ast`) into concrete source
//! text, one module at a time. It is organized the way new output dialects
//! are expected to plug in:
//!
//! - [`EmitterContext`]: the accumulating, indentation-tracking buffer every
//!   dialect prints into; it also knows which top-level names the module
//!   exports.
//! - [`EmitterVisitor`]: the generic traversal. Every statement and
//!   expression kind has a default rendering, exposed both as overridable
//!   trait methods and as `walk_*` free functions so an override can still
//!   delegate to the default behavior.
//! - [`JavaScriptEmitter`]: the one dialect shipped here, CommonJS-flavored
//!   ES5 output with `require` import aliasing and live-binding exports.
//! - [`ImportResolver`]: how a module identifier becomes an import path;
//!   [`RelativeImportResolver`] covers the common layout where identifiers
//!   are `/`-separated logical paths.
//!
//! # Example
//!
//! ```rust
//! use vellum_ast::{ExprBuilder, Statement};
//! use vellum_core::ModuleId;
//! use vellum_emit::{JavaScriptEmitter, RelativeImportResolver};
//!
//! let module = ModuleId::from("app/main");
//! let statements = vec![Statement::DeclareVar {
//!     name: "answer".to_string(),
//!     value: Some(ExprBuilder::int(42)),
//! }];
//!
//! let emitter = JavaScriptEmitter::new(RelativeImportResolver);
//! let source = emitter
//!     .emit(&module, &statements, &["answer".to_string()])
//!     .unwrap();
//! assert!(source.contains("var answer = 42;"));
//! assert!(source.contains("Object.defineProperty(exports,'answer'"));
//! ```

mod context;
mod escape;
mod js;
mod resolve;
mod visitor;

pub use context::{ClassScope, EmitterContext};
pub use js::JavaScriptEmitter;
pub use resolve::{ImportResolver, RelativeImportResolver};
pub use visitor::{
    EmitterVisitor, visit_all_statements, walk_declare_class_stmt, walk_declare_fn_stmt,
    walk_declare_var_stmt, walk_expr, walk_statement,
};
