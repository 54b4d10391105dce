//! Output AST expression types.

use serde::{Deserialize, Serialize};
use vellum_core::ModuleId;

use crate::Statement;

/// A reference to a symbol by name, optionally owned by another module.
///
/// References with no owning module (or whose owning module is the one
/// currently being emitted) print as the bare name; everything else goes
/// through the emitting dialect's import machinery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalRef {
    /// Symbol name. An empty name is a well-formedness violation and is
    /// rejected by every emitter.
    pub name: String,
    /// The module that defines the symbol, if it is not the current one.
    pub module: Option<ModuleId>,
}

impl ExternalRef {
    /// Creates a reference to `name` defined in `module`.
    #[must_use]
    pub fn new(module: impl Into<ModuleId>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: Some(module.into()),
        }
    }

    /// Creates a reference to `name` with no owning module.
    #[must_use]
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
        }
    }

    /// Returns true if this reference resolves within `module` itself.
    #[must_use]
    pub fn is_local_to(&self, module: &ModuleId) -> bool {
        self.module.as_ref().is_none_or(|owner| owner == module)
    }
}

/// Variables every dialect provides without a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuiltinVar {
    This,
    Super,
    /// The caught error inside a catch body.
    CatchError,
    /// The stack trace of the caught error inside a catch body.
    CatchStack,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Equals,
    NotEquals,
    Identical,
    NotIdentical,
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    And,
    Or,
    Lower,
    LowerEquals,
    Bigger,
    BiggerEquals,
}

impl BinaryOp {
    /// Returns the operator's surface syntax.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::Identical => "===",
            Self::NotIdentical => "!==",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::And => "&&",
            Self::Or => "||",
            Self::Lower => "<",
            Self::LowerEquals => "<=",
            Self::Bigger => ">",
            Self::BiggerEquals => ">=",
        }
    }
}

/// Literal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// One `key: value` entry of a literal map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntry {
    pub key: String,
    pub value: Expr,
    /// Forces the key to print quoted even when it is identifier-safe.
    pub quoted: bool,
}

impl MapEntry {
    /// Creates an unquoted entry.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: key.into(),
            value,
            quoted: false,
        }
    }

    /// Creates an entry whose key always prints quoted.
    #[must_use]
    pub fn quoted(key: impl Into<String>, value: Expr) -> Self {
        Self {
            key: key.into(),
            value,
            quoted: true,
        }
    }
}

/// An expression in the output AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Reads a variable by name.
    ReadVar(String),

    /// Reads one of the dialect-provided builtin variables.
    Builtin(BuiltinVar),

    /// Assigns to a variable.
    WriteVar { name: String, value: Box<Expr> },

    /// Assigns to a property of a receiver.
    WriteProp {
        receiver: Box<Expr>,
        name: String,
        value: Box<Expr>,
    },

    /// Assigns to an indexed slot of a receiver.
    WriteKey {
        receiver: Box<Expr>,
        index: Box<Expr>,
        value: Box<Expr>,
    },

    /// Calls a function-valued expression.
    InvokeFn { target: Box<Expr>, args: Vec<Expr> },

    /// Calls a method on a receiver.
    InvokeMethod {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },

    /// Constructs a new instance of a class-valued expression.
    Instantiate { class: Box<Expr>, args: Vec<Expr> },

    /// A literal value.
    Literal(LiteralValue),

    /// A reference to a symbol, possibly defined in another module.
    External(ExternalRef),

    /// A ternary conditional.
    Conditional {
        condition: Box<Expr>,
        true_case: Box<Expr>,
        false_case: Box<Expr>,
    },

    /// Logical negation.
    Not(Box<Expr>),

    /// An anonymous function.
    Fn {
        params: Vec<String>,
        body: Vec<Statement>,
    },

    /// A binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// Reads a property of a receiver.
    ReadProp { receiver: Box<Expr>, name: String },

    /// Reads an indexed slot of a receiver.
    ReadKey {
        receiver: Box<Expr>,
        index: Box<Expr>,
    },

    /// An array literal.
    LiteralArray(Vec<Expr>),

    /// A map literal.
    LiteralMap(Vec<MapEntry>),
}

impl Expr {
    /// Reads a property of this expression.
    #[must_use]
    pub fn prop(self, name: impl Into<String>) -> Self {
        Self::ReadProp {
            receiver: Box::new(self),
            name: name.into(),
        }
    }

    /// Reads an indexed slot of this expression.
    #[must_use]
    pub fn key(self, index: Self) -> Self {
        Self::ReadKey {
            receiver: Box::new(self),
            index: Box::new(index),
        }
    }

    /// Calls this expression as a function.
    #[must_use]
    pub fn call(self, args: Vec<Self>) -> Self {
        Self::InvokeFn {
            target: Box::new(self),
            args,
        }
    }

    /// Calls a method on this expression.
    #[must_use]
    pub fn method(self, name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::InvokeMethod {
            receiver: Box::new(self),
            method: name.into(),
            args,
        }
    }

    /// Constructs a new instance with this expression as the class.
    #[must_use]
    pub fn instantiate(self, args: Vec<Self>) -> Self {
        Self::Instantiate {
            class: Box::new(self),
            args,
        }
    }

    /// Builds a conditional with this expression as the condition.
    #[must_use]
    pub fn conditional(self, true_case: Self, false_case: Self) -> Self {
        Self::Conditional {
            condition: Box::new(self),
            true_case: Box::new(true_case),
            false_case: Box::new(false_case),
        }
    }

    /// Logically negates this expression.
    #[must_use]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Combines this expression with `rhs` under `op`.
    #[must_use]
    pub fn binary(self, op: BinaryOp, rhs: Self) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(self),
            rhs: Box::new(rhs),
        }
    }

    /// Wraps this expression in an expression statement.
    #[must_use]
    pub fn into_stmt(self) -> Statement {
        Statement::Expr(self)
    }
}
