//! The vellum output AST.
//!
//! A language-neutral statement/expression tree describing the code a
//! generator wants to produce. Dialect emitters (see the `vellum-emit`
//! crate) render this tree into concrete source text; the tree itself
//! carries no dialect-specific information.
//!
//! # Example
//!
//! ```rust
//! use vellum_ast::{ExprBuilder, Statement};
//!
//! // var greeting = 'hello';
//! let stmt = Statement::DeclareVar {
//!     name: "greeting".to_string(),
//!     value: Some(ExprBuilder::string("hello")),
//! };
//! assert_eq!(stmt.declared_name(), Some("greeting"));
//! ```

mod builder;
mod expression;
mod statement;

pub use builder::ExprBuilder;
pub use expression::{BinaryOp, BuiltinVar, Expr, ExternalRef, LiteralValue, MapEntry};
pub use statement::{
    ClassConstructor, ClassField, ClassGetter, ClassMethod, ClassStmt, Statement,
};
