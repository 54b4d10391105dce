//! Output AST statement types.

use serde::{Deserialize, Serialize};

use crate::Expr;

/// A statement in the output AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// Evaluates an expression for its effect.
    Expr(Expr),

    /// Declares a variable, optionally with an initializer.
    DeclareVar { name: String, value: Option<Expr> },

    /// Declares a named function.
    DeclareFn {
        name: String,
        params: Vec<String>,
        body: Vec<Statement>,
    },

    /// Declares a class.
    DeclareClass(ClassStmt),

    /// Returns from the enclosing function, optionally with a value.
    Return(Option<Expr>),

    /// Conditional execution. An empty `else_body` renders no else branch.
    If {
        condition: Expr,
        then_body: Vec<Statement>,
        else_body: Vec<Statement>,
    },

    /// Runs `body`, transferring control to `catch_body` on a thrown error.
    TryCatch {
        body: Vec<Statement>,
        catch_body: Vec<Statement>,
    },

    /// Throws an error value.
    Throw(Expr),

    /// A line comment. Embedded newlines produce one comment line each.
    Comment(String),
}

impl Statement {
    /// Returns the introduced name when this is a declaration statement.
    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::DeclareVar { name, .. } | Self::DeclareFn { name, .. } => Some(name),
            Self::DeclareClass(class) => Some(&class.name),
            _ => None,
        }
    }

    /// Returns true for the three declaration kinds.
    #[must_use]
    pub fn is_declaration(&self) -> bool {
        self.declared_name().is_some()
    }
}

/// A class declaration.
///
/// Dialects without native classes (e.g. ES5 JavaScript) synthesize an
/// equivalent from a constructor function and prototype assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassStmt {
    pub name: String,
    /// Parent class expression, when extending.
    pub parent: Option<Expr>,
    pub fields: Vec<ClassField>,
    pub constructor: Option<ClassConstructor>,
    pub getters: Vec<ClassGetter>,
    pub methods: Vec<ClassMethod>,
}

impl ClassStmt {
    /// Creates an empty class with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            fields: Vec::new(),
            constructor: None,
            getters: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Sets the parent class expression.
    #[must_use]
    pub fn with_parent(mut self, parent: Expr) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: ClassField) -> Self {
        self.fields.push(field);
        self
    }

    /// Sets the constructor.
    #[must_use]
    pub fn with_constructor(mut self, constructor: ClassConstructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    /// Adds a getter.
    #[must_use]
    pub fn with_getter(mut self, getter: ClassGetter) -> Self {
        self.getters.push(getter);
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn with_method(mut self, method: ClassMethod) -> Self {
        self.methods.push(method);
        self
    }
}

/// An instance field, initialized when the constructor runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassField {
    pub name: String,
    pub initializer: Option<Expr>,
}

impl ClassField {
    /// Creates a field with no initializer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initializer: None,
        }
    }

    /// Creates a field initialized to `value`.
    #[must_use]
    pub fn with_initializer(name: impl Into<String>, value: Expr) -> Self {
        Self {
            name: name.into(),
            initializer: Some(value),
        }
    }
}

/// A class constructor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassConstructor {
    pub params: Vec<String>,
    pub body: Vec<Statement>,
}

impl ClassConstructor {
    /// Creates a constructor.
    #[must_use]
    pub fn new(params: Vec<String>, body: Vec<Statement>) -> Self {
        Self { params, body }
    }
}

/// A property getter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassGetter {
    pub name: String,
    pub body: Vec<Statement>,
}

impl ClassGetter {
    /// Creates a getter.
    #[must_use]
    pub fn new(name: impl Into<String>, body: Vec<Statement>) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// An instance method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMethod {
    pub name: String,
    pub params: Vec<String>,
    pub body: Vec<Statement>,
}

impl ClassMethod {
    /// Creates a method.
    #[must_use]
    pub fn new(name: impl Into<String>, params: Vec<String>, body: Vec<Statement>) -> Self {
        Self {
            name: name.into(),
            params,
            body,
        }
    }
}
