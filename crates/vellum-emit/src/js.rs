//! The JavaScript dialect emitter.
//!
//! Renders one module as CommonJS-flavored ES5 source. Two concerns are
//! specific to this dialect and live here:
//!
//! - references into other modules resolve through a per-emission table of
//!   `require` aliases, assigned in first-encounter order;
//! - exported declarations are followed by a statement re-publishing the
//!   name as a *live* binding: a getter on `exports` that reads the current
//!   value at access time, so later reassignment inside the module stays
//!   visible to importers. The output format has no native construct for
//!   this, hence the accessor synthesis.

use vellum_ast::{ClassStmt, Expr, ExprBuilder, ExternalRef, MapEntry, Statement};
use vellum_core::{Error, ModuleId, Result};

use crate::context::EmitterContext;
use crate::escape::escape_single_quoted;
use crate::resolve::ImportResolver;
use crate::visitor::{self, EmitterVisitor};

/// Emits JavaScript source text for one module at a time.
///
/// The emitter itself is stateless between calls: every [`emit`] call
/// allocates its own context and import table, so a single emitter can be
/// shared freely, including across threads when the resolver is `Sync`.
///
/// [`emit`]: JavaScriptEmitter::emit
#[derive(Debug)]
pub struct JavaScriptEmitter<R> {
    resolver: R,
}

impl<R: ImportResolver> JavaScriptEmitter<R> {
    /// Creates an emitter that resolves import paths with `resolver`.
    #[must_use]
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Emits the complete source text for `module`.
    ///
    /// Output is deterministic for identical input. The preamble binds one
    /// alias per distinct referenced module, in first-reference order,
    /// followed by the rendered statements.
    ///
    /// # Errors
    /// Fails on a malformed external reference (empty symbol name) or when
    /// the resolver rejects an imported module; no partial output is
    /// returned.
    pub fn emit(
        &self,
        module: &ModuleId,
        statements: &[Statement],
        exported: &[String],
    ) -> Result<String> {
        let mut ctx = EmitterContext::create_root(exported);
        let mut converter = JsModuleVisitor::new(module);
        visitor::visit_all_statements(&mut converter, statements, &mut ctx)?;

        let mut source = String::new();
        for (imported, alias) in converter.imports.entries() {
            let path = self.resolver.resolve(module, imported)?;
            source.push_str(&format!(
                "var {alias} = require({});\n",
                escape_single_quoted(&path)
            ));
        }
        source.push_str(&ctx.to_source());
        Ok(source)
    }
}

/// Deduplicated aliases for the modules one emission references.
///
/// Entries keep strict first-encounter order; the preamble is emitted by
/// iterating them. The table is created inside [`JavaScriptEmitter::emit`]
/// and dropped with it; alias numbering must never leak into the emission
/// of another module.
#[derive(Debug, Default)]
struct ImportTable {
    entries: Vec<(ModuleId, String)>,
}

impl ImportTable {
    /// Returns the alias for `module`, assigning `import{N}` (N = current
    /// table size) on first encounter.
    fn alias_for(&mut self, module: &ModuleId) -> &str {
        let index = match self.entries.iter().position(|(known, _)| known == module) {
            Some(index) => index,
            None => {
                let alias = format!("import{}", self.entries.len());
                self.entries.push((module.clone(), alias));
                self.entries.len() - 1
            }
        };
        &self.entries[index].1
    }

    fn entries(&self) -> &[(ModuleId, String)] {
        &self.entries
    }
}

/// The specialized visitor for the JavaScript dialect.
///
/// Holds the only mutable state of an emission besides the context: the
/// import table. A fresh visitor is created per `emit` call.
struct JsModuleVisitor<'a> {
    module: &'a ModuleId,
    imports: ImportTable,
}

impl<'a> JsModuleVisitor<'a> {
    fn new(module: &'a ModuleId) -> Self {
        Self {
            module,
            imports: ImportTable::default(),
        }
    }

    fn emit_export_binding(&mut self, name: &str, ctx: &mut EmitterContext) -> Result<()> {
        let stmt = live_export_stmt(name);
        self.visit_statement(&stmt, ctx)
    }
}

impl EmitterVisitor for JsModuleVisitor<'_> {
    fn visit_external_expr(
        &mut self,
        reference: &ExternalRef,
        ctx: &mut EmitterContext,
    ) -> Result<()> {
        if reference.name.is_empty() {
            return Err(Error::MalformedReference);
        }
        match &reference.module {
            Some(owner) if owner != self.module => {
                let alias = self.imports.alias_for(owner);
                ctx.print(&format!("{alias}.{}", reference.name));
            }
            _ => ctx.print(&reference.name),
        }
        Ok(())
    }

    fn visit_declare_var_stmt(
        &mut self,
        name: &str,
        value: Option<&Expr>,
        ctx: &mut EmitterContext,
    ) -> Result<()> {
        visitor::walk_declare_var_stmt(self, name, value, ctx)?;
        if ctx.is_top_level() && ctx.is_exported_var(name) {
            self.emit_export_binding(name, ctx)?;
        }
        Ok(())
    }

    fn visit_declare_fn_stmt(
        &mut self,
        name: &str,
        params: &[String],
        body: &[Statement],
        ctx: &mut EmitterContext,
    ) -> Result<()> {
        visitor::walk_declare_fn_stmt(self, name, params, body, ctx)?;
        if ctx.is_top_level() && ctx.is_exported_var(name) {
            self.emit_export_binding(name, ctx)?;
        }
        Ok(())
    }

    fn visit_declare_class_stmt(
        &mut self,
        class: &ClassStmt,
        ctx: &mut EmitterContext,
    ) -> Result<()> {
        visitor::walk_declare_class_stmt(self, class, ctx)?;
        if ctx.is_top_level() && ctx.is_exported_var(&class.name) {
            self.emit_export_binding(&class.name, ctx)?;
        }
        Ok(())
    }
}

/// Builds the statement that re-publishes `name` as a live binding:
/// `Object.defineProperty(exports, 'name', {get: function() { return name; }});`
///
/// Kept as an AST template rather than spliced text so a future dialect can
/// render the same intent through its own export construct.
fn live_export_stmt(name: &str) -> Statement {
    let getter = ExprBuilder::function(
        vec![],
        vec![Statement::Return(Some(ExprBuilder::variable(name)))],
    );
    ExprBuilder::variable("Object")
        .method(
            "defineProperty",
            vec![
                ExprBuilder::variable("exports"),
                ExprBuilder::string(name),
                Expr::LiteralMap(vec![MapEntry::new("get", getter)]),
            ],
        )
        .into_stmt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_assignment_follows_first_encounter_order() {
        let mut table = ImportTable::default();
        let b = ModuleId::from("app/b");
        let c = ModuleId::from("app/c");

        assert_eq!(table.alias_for(&b), "import0");
        assert_eq!(table.alias_for(&c), "import1");
        assert_eq!(table.alias_for(&b), "import0");

        let modules: Vec<&str> = table
            .entries()
            .iter()
            .map(|(module, _)| module.as_str())
            .collect();
        assert_eq!(modules, vec!["app/b", "app/c"]);
    }

    #[test]
    fn test_one_alias_per_module_regardless_of_reference_count() {
        let mut table = ImportTable::default();
        let b = ModuleId::from("app/b");
        for _ in 0..5 {
            table.alias_for(&b);
        }
        assert_eq!(table.entries().len(), 1);
    }

    #[test]
    fn test_live_export_stmt_is_a_define_property_call() {
        let Statement::Expr(Expr::InvokeMethod {
            receiver, method, args,
        }) = live_export_stmt("x")
        else {
            panic!("expected a method-call statement");
        };
        assert_eq!(*receiver, Expr::ReadVar("Object".to_string()));
        assert_eq!(method, "defineProperty");
        assert_eq!(args.len(), 3);
        assert_eq!(args[0], Expr::ReadVar("exports".to_string()));
    }
}
