//! Generic statement/expression traversal with default rendering.
//!
//! [`EmitterVisitor`] gives every statement and expression kind a default
//! textual form. The defaults live in `walk_*` free functions; the trait
//! methods simply delegate to them, so a dialect can override a hook and
//! still call the default from inside its override. The only operation with
//! no default is [`EmitterVisitor::visit_external_expr`]: how a reference
//! into another module prints is inherently dialect business.

use vellum_ast::{BuiltinVar, ClassStmt, Expr, ExternalRef, LiteralValue, Statement};
use vellum_core::{Error, Result};

use crate::context::EmitterContext;
use crate::escape::{escape_identifier, escape_single_quoted};

/// A dialect's rendering hooks over the generic traversal.
pub trait EmitterVisitor {
    /// Prints a reference to a symbol that may live in another module.
    ///
    /// This is where dialects implement import aliasing; there is no
    /// default.
    fn visit_external_expr(
        &mut self,
        reference: &ExternalRef,
        ctx: &mut EmitterContext,
    ) -> Result<()>;

    /// Prints one statement.
    fn visit_statement(&mut self, stmt: &Statement, ctx: &mut EmitterContext) -> Result<()>
    where
        Self: Sized,
    {
        walk_statement(self, stmt, ctx)
    }

    /// Prints a variable declaration.
    fn visit_declare_var_stmt(
        &mut self,
        name: &str,
        value: Option<&Expr>,
        ctx: &mut EmitterContext,
    ) -> Result<()>
    where
        Self: Sized,
    {
        walk_declare_var_stmt(self, name, value, ctx)
    }

    /// Prints a function declaration.
    fn visit_declare_fn_stmt(
        &mut self,
        name: &str,
        params: &[String],
        body: &[Statement],
        ctx: &mut EmitterContext,
    ) -> Result<()>
    where
        Self: Sized,
    {
        walk_declare_fn_stmt(self, name, params, body, ctx)
    }

    /// Prints a class declaration.
    fn visit_declare_class_stmt(
        &mut self,
        class: &ClassStmt,
        ctx: &mut EmitterContext,
    ) -> Result<()>
    where
        Self: Sized,
    {
        walk_declare_class_stmt(self, class, ctx)
    }

    /// Prints one expression.
    fn visit_expr(&mut self, expr: &Expr, ctx: &mut EmitterContext) -> Result<()>
    where
        Self: Sized,
    {
        walk_expr(self, expr, ctx)
    }
}

/// Prints every statement of `stmts` in order.
pub fn visit_all_statements<V: EmitterVisitor>(
    visitor: &mut V,
    stmts: &[Statement],
    ctx: &mut EmitterContext,
) -> Result<()> {
    for stmt in stmts {
        visitor.visit_statement(stmt, ctx)?;
    }
    Ok(())
}

/// Default rendering for one statement.
pub fn walk_statement<V: EmitterVisitor>(
    visitor: &mut V,
    stmt: &Statement,
    ctx: &mut EmitterContext,
) -> Result<()> {
    match stmt {
        Statement::Expr(expr) => {
            visitor.visit_expr(expr, ctx)?;
            ctx.println(";");
        }
        Statement::DeclareVar { name, value } => {
            visitor.visit_declare_var_stmt(name, value.as_ref(), ctx)?;
        }
        Statement::DeclareFn { name, params, body } => {
            visitor.visit_declare_fn_stmt(name, params, body, ctx)?;
        }
        Statement::DeclareClass(class) => {
            visitor.visit_declare_class_stmt(class, ctx)?;
        }
        Statement::Return(value) => match value {
            Some(expr) => {
                ctx.print("return ");
                visitor.visit_expr(expr, ctx)?;
                ctx.println(";");
            }
            None => ctx.println("return;"),
        },
        Statement::If {
            condition,
            then_body,
            else_body,
        } => {
            ctx.print("if (");
            visitor.visit_expr(condition, ctx)?;
            ctx.println(") {");
            ctx.inc_indent();
            visit_all_statements(visitor, then_body, ctx)?;
            ctx.dec_indent();
            if else_body.is_empty() {
                ctx.println("}");
            } else {
                ctx.println("} else {");
                ctx.inc_indent();
                visit_all_statements(visitor, else_body, ctx)?;
                ctx.dec_indent();
                ctx.println("}");
            }
        }
        Statement::TryCatch { body, catch_body } => {
            ctx.println("try {");
            ctx.inc_indent();
            visit_all_statements(visitor, body, ctx)?;
            ctx.dec_indent();
            ctx.println("} catch (error) {");
            ctx.inc_indent();
            // The stack is captured eagerly: reading it later may observe a
            // rethrown error instead.
            ctx.println("var stack = error.stack;");
            visit_all_statements(visitor, catch_body, ctx)?;
            ctx.dec_indent();
            ctx.println("}");
        }
        Statement::Throw(expr) => {
            ctx.print("throw ");
            visitor.visit_expr(expr, ctx)?;
            ctx.println(";");
        }
        Statement::Comment(text) => {
            for line in text.split('\n') {
                if line.is_empty() {
                    ctx.println("//");
                } else {
                    ctx.println(&format!("// {line}"));
                }
            }
        }
    }
    Ok(())
}

/// Default rendering for a variable declaration.
pub fn walk_declare_var_stmt<V: EmitterVisitor>(
    visitor: &mut V,
    name: &str,
    value: Option<&Expr>,
    ctx: &mut EmitterContext,
) -> Result<()> {
    ctx.print(&format!("var {name}"));
    if let Some(value) = value {
        ctx.print(" = ");
        visitor.visit_expr(value, ctx)?;
    }
    ctx.println(";");
    Ok(())
}

/// Default rendering for a function declaration.
pub fn walk_declare_fn_stmt<V: EmitterVisitor>(
    visitor: &mut V,
    name: &str,
    params: &[String],
    body: &[Statement],
    ctx: &mut EmitterContext,
) -> Result<()> {
    ctx.print(&format!("function {name}("));
    ctx.print(&params.join(","));
    ctx.println(") {");
    ctx.inc_indent();
    visit_all_statements(visitor, body, ctx)?;
    ctx.dec_indent();
    ctx.println("}");
    Ok(())
}

/// Default rendering for a class declaration.
///
/// Classes are synthesized ES5-style: a constructor function carrying field
/// initialization, a prototype chained to the parent, getters defined as
/// accessor properties and methods assigned onto the prototype.
pub fn walk_declare_class_stmt<V: EmitterVisitor>(
    visitor: &mut V,
    class: &ClassStmt,
    ctx: &mut EmitterContext,
) -> Result<()> {
    ctx.push_class(class);

    ctx.print(&format!("function {}(", class.name));
    if let Some(constructor) = &class.constructor {
        ctx.print(&constructor.params.join(","));
    }
    ctx.println(") {");
    ctx.inc_indent();
    for field in &class.fields {
        ctx.print(&format!("this.{} = ", field.name));
        match &field.initializer {
            Some(value) => visitor.visit_expr(value, ctx)?,
            None => ctx.print("null"),
        }
        ctx.println(";");
    }
    if let Some(constructor) = &class.constructor {
        visit_all_statements(visitor, &constructor.body, ctx)?;
    }
    ctx.dec_indent();
    ctx.println("}");

    if let Some(parent) = &class.parent {
        ctx.print(&format!("{}.prototype = Object.create(", class.name));
        visitor.visit_expr(parent, ctx)?;
        ctx.println(".prototype);");
    }

    for getter in &class.getters {
        ctx.println(&format!(
            "Object.defineProperty({}.prototype, {}, {{get: function() {{",
            class.name,
            escape_single_quoted(&getter.name)
        ));
        ctx.inc_indent();
        visit_all_statements(visitor, &getter.body, ctx)?;
        ctx.dec_indent();
        ctx.println("}});");
    }

    for method in &class.methods {
        ctx.print(&format!(
            "{}.prototype.{} = function(",
            class.name, method.name
        ));
        ctx.print(&method.params.join(","));
        ctx.println(") {");
        ctx.inc_indent();
        visit_all_statements(visitor, &method.body, ctx)?;
        ctx.dec_indent();
        ctx.println("};");
    }

    ctx.pop_class();
    Ok(())
}

/// Default rendering for one expression.
pub fn walk_expr<V: EmitterVisitor>(
    visitor: &mut V,
    expr: &Expr,
    ctx: &mut EmitterContext,
) -> Result<()> {
    match expr {
        Expr::ReadVar(name) => ctx.print(name),
        Expr::Builtin(builtin) => ctx.print(builtin_name(*builtin)),
        Expr::WriteVar { name, value } => {
            let wrap = !ctx.line_is_empty();
            if wrap {
                ctx.print("(");
            }
            ctx.print(&format!("{name} = "));
            visitor.visit_expr(value, ctx)?;
            if wrap {
                ctx.print(")");
            }
        }
        Expr::WriteProp {
            receiver,
            name,
            value,
        } => {
            let wrap = !ctx.line_is_empty();
            if wrap {
                ctx.print("(");
            }
            visitor.visit_expr(receiver, ctx)?;
            ctx.print(&format!(".{name} = "));
            visitor.visit_expr(value, ctx)?;
            if wrap {
                ctx.print(")");
            }
        }
        Expr::WriteKey {
            receiver,
            index,
            value,
        } => {
            let wrap = !ctx.line_is_empty();
            if wrap {
                ctx.print("(");
            }
            visitor.visit_expr(receiver, ctx)?;
            ctx.print("[");
            visitor.visit_expr(index, ctx)?;
            ctx.print("] = ");
            visitor.visit_expr(value, ctx)?;
            if wrap {
                ctx.print(")");
            }
        }
        Expr::InvokeFn { target, args } => {
            if matches!(target.as_ref(), Expr::Builtin(BuiltinVar::Super)) {
                walk_super_call(visitor, args, ctx)?;
            } else {
                visitor.visit_expr(target, ctx)?;
                ctx.print("(");
                visit_all_exprs(visitor, args, ctx, ",")?;
                ctx.print(")");
            }
        }
        Expr::InvokeMethod {
            receiver,
            method,
            args,
        } => {
            visitor.visit_expr(receiver, ctx)?;
            ctx.print(&format!(".{method}("));
            visit_all_exprs(visitor, args, ctx, ",")?;
            ctx.print(")");
        }
        Expr::Instantiate { class, args } => {
            ctx.print("new ");
            visitor.visit_expr(class, ctx)?;
            ctx.print("(");
            visit_all_exprs(visitor, args, ctx, ",")?;
            ctx.print(")");
        }
        Expr::Literal(value) => print_literal(value, ctx),
        Expr::External(reference) => visitor.visit_external_expr(reference, ctx)?,
        Expr::Conditional {
            condition,
            true_case,
            false_case,
        } => {
            ctx.print("(");
            visitor.visit_expr(condition, ctx)?;
            ctx.print("? ");
            visitor.visit_expr(true_case, ctx)?;
            ctx.print(": ");
            visitor.visit_expr(false_case, ctx)?;
            ctx.print(")");
        }
        Expr::Not(inner) => {
            ctx.print("!");
            visitor.visit_expr(inner, ctx)?;
        }
        Expr::Fn { params, body } => {
            ctx.print("function(");
            ctx.print(&params.join(","));
            ctx.println(") {");
            ctx.inc_indent();
            visit_all_statements(visitor, body, ctx)?;
            ctx.dec_indent();
            ctx.print("}");
        }
        Expr::Binary { op, lhs, rhs } => {
            ctx.print("(");
            visitor.visit_expr(lhs, ctx)?;
            ctx.print(&format!(" {} ", op.symbol()));
            visitor.visit_expr(rhs, ctx)?;
            ctx.print(")");
        }
        Expr::ReadProp { receiver, name } => {
            visitor.visit_expr(receiver, ctx)?;
            ctx.print(&format!(".{name}"));
        }
        Expr::ReadKey { receiver, index } => {
            visitor.visit_expr(receiver, ctx)?;
            ctx.print("[");
            visitor.visit_expr(index, ctx)?;
            ctx.print("]");
        }
        Expr::LiteralArray(items) => {
            ctx.print("[");
            visit_all_exprs(visitor, items, ctx, ",")?;
            ctx.print("]");
        }
        Expr::LiteralMap(entries) => {
            ctx.print("{");
            for (index, entry) in entries.iter().enumerate() {
                if index > 0 {
                    ctx.print(",");
                }
                ctx.print(&format!(
                    "{}: ",
                    escape_identifier(&entry.key, entry.quoted)
                ));
                visitor.visit_expr(&entry.value, ctx)?;
            }
            ctx.print("}");
        }
    }
    Ok(())
}

/// Prints `exprs` separated by `separator`.
pub(crate) fn visit_all_exprs<V: EmitterVisitor>(
    visitor: &mut V,
    exprs: &[Expr],
    ctx: &mut EmitterContext,
    separator: &str,
) -> Result<()> {
    for (index, expr) in exprs.iter().enumerate() {
        if index > 0 {
            ctx.print(separator);
        }
        visitor.visit_expr(expr, ctx)?;
    }
    Ok(())
}

// A super(...) constructor call has no direct ES5 form; it becomes a call of
// the parent constructor with an explicit receiver.
fn walk_super_call<V: EmitterVisitor>(
    visitor: &mut V,
    args: &[Expr],
    ctx: &mut EmitterContext,
) -> Result<()> {
    let Some(scope) = ctx.current_class() else {
        return Err(Error::Emit(
            "'super' constructor call outside of a class".to_string(),
        ));
    };
    let Some(parent) = scope.parent.clone() else {
        return Err(Error::Emit(format!(
            "'super' constructor call in class '{}' which has no parent",
            scope.name
        )));
    };
    visitor.visit_expr(&parent, ctx)?;
    ctx.print(".call(this");
    for arg in args {
        ctx.print(",");
        visitor.visit_expr(arg, ctx)?;
    }
    ctx.print(")");
    Ok(())
}

fn print_literal(value: &LiteralValue, ctx: &mut EmitterContext) {
    match value {
        LiteralValue::Str(text) => ctx.print(&escape_single_quoted(text)),
        LiteralValue::Int(value) => ctx.print(&value.to_string()),
        LiteralValue::Float(value) => ctx.print(&value.to_string()),
        LiteralValue::Bool(value) => ctx.print(if *value { "true" } else { "false" }),
        LiteralValue::Null => ctx.print("null"),
    }
}

const fn builtin_name(builtin: BuiltinVar) -> &'static str {
    match builtin {
        BuiltinVar::This => "this",
        BuiltinVar::Super => "super",
        BuiltinVar::CatchError => "error",
        BuiltinVar::CatchStack => "stack",
    }
}
