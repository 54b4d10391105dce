//! Helper functions for creating common expressions.

use vellum_core::ModuleId;

use crate::{BuiltinVar, Expr, ExternalRef, LiteralValue, MapEntry, Statement};

/// Helper functions for creating common expressions.
pub struct ExprBuilder;

impl ExprBuilder {
    /// Creates a variable read.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::ReadVar(name.into())
    }

    /// Creates a read of the `this` builtin.
    #[must_use]
    pub fn this() -> Expr {
        Expr::Builtin(BuiltinVar::This)
    }

    /// Creates a read of the `super` builtin.
    #[must_use]
    pub fn superclass() -> Expr {
        Expr::Builtin(BuiltinVar::Super)
    }

    /// Creates an integer literal.
    #[must_use]
    pub fn int(value: i64) -> Expr {
        Expr::Literal(LiteralValue::Int(value))
    }

    /// Creates a float literal.
    #[must_use]
    pub fn float(value: f64) -> Expr {
        Expr::Literal(LiteralValue::Float(value))
    }

    /// Creates a string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Expr {
        Expr::Literal(LiteralValue::Str(value.into()))
    }

    /// Creates a boolean literal.
    #[must_use]
    pub fn bool(value: bool) -> Expr {
        Expr::Literal(LiteralValue::Bool(value))
    }

    /// Creates a null literal.
    #[must_use]
    pub fn null() -> Expr {
        Expr::Literal(LiteralValue::Null)
    }

    /// Creates a reference to `name` defined in `module`.
    #[must_use]
    pub fn external(module: impl Into<ModuleId>, name: impl Into<String>) -> Expr {
        Expr::External(ExternalRef::new(module, name))
    }

    /// Creates a reference to `name` with no owning module.
    #[must_use]
    pub fn external_local(name: impl Into<String>) -> Expr {
        Expr::External(ExternalRef::local(name))
    }

    /// Creates an anonymous function expression.
    #[must_use]
    pub fn function(params: Vec<String>, body: Vec<Statement>) -> Expr {
        Expr::Fn { params, body }
    }

    /// Creates an array literal.
    #[must_use]
    pub fn array(items: Vec<Expr>) -> Expr {
        Expr::LiteralArray(items)
    }

    /// Creates a map literal with unquoted keys.
    #[must_use]
    pub fn map(entries: Vec<(&str, Expr)>) -> Expr {
        Expr::LiteralMap(
            entries
                .into_iter()
                .map(|(key, value)| MapEntry::new(key, value))
                .collect(),
        )
    }

    /// Creates a variable assignment.
    #[must_use]
    pub fn assign(name: impl Into<String>, value: Expr) -> Expr {
        Expr::WriteVar {
            name: name.into(),
            value: Box::new(value),
        }
    }
}
