//! The output buffer dialect emitters print into.

use std::collections::HashSet;

use vellum_ast::{ClassStmt, Expr};

const INDENT_UNIT: &str = "  ";

/// One buffered output line and the indent depth it was opened at.
#[derive(Debug)]
struct Line {
    indent: usize,
    content: String,
}

impl Line {
    fn new(indent: usize) -> Self {
        Self {
            indent,
            content: String::new(),
        }
    }
}

/// The scope of a class currently being rendered.
///
/// The parent expression is kept so that `super(...)` constructor calls can
/// be rewritten against it.
#[derive(Debug, Clone)]
pub struct ClassScope {
    pub name: String,
    pub parent: Option<Expr>,
}

/// An accumulating, indentation-tracking text buffer that also knows which
/// top-level names the module exports.
///
/// One context is created per module emission and discarded with it.
/// Statement bodies always print one indent level deeper than their parent,
/// so the indent depth doubles as the statement scope depth; see
/// [`EmitterContext::is_top_level`].
#[derive(Debug)]
pub struct EmitterContext {
    lines: Vec<Line>,
    indent: usize,
    exported: HashSet<String>,
    classes: Vec<ClassScope>,
}

impl EmitterContext {
    /// Creates a root context for a module exporting `exported_vars`.
    #[must_use]
    pub fn create_root(exported_vars: &[String]) -> Self {
        Self {
            lines: vec![Line::new(0)],
            indent: 0,
            exported: exported_vars.iter().cloned().collect(),
            classes: Vec::new(),
        }
    }

    /// Appends `text` to the current line.
    pub fn print(&mut self, text: &str) {
        self.current_line().content.push_str(text);
    }

    /// Appends `text` to the current line, then starts a new one.
    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.lines.push(Line::new(self.indent));
    }

    /// Returns true when nothing has been printed on the current line yet.
    #[must_use]
    pub fn line_is_empty(&self) -> bool {
        self.lines.last().is_none_or(|line| line.content.is_empty())
    }

    /// Increases the indent for subsequent lines.
    pub fn inc_indent(&mut self) {
        self.indent += 1;
        self.realign_open_line();
    }

    /// Decreases the indent for subsequent lines.
    pub fn dec_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.realign_open_line();
    }

    // An indent change between println and the next print must move the line
    // that is already open.
    fn realign_open_line(&mut self) {
        let indent = self.indent;
        if self.line_is_empty()
            && let Some(line) = self.lines.last_mut()
        {
            line.indent = indent;
        }
    }

    /// Returns true if `name` is part of the module's export surface.
    #[must_use]
    pub fn is_exported_var(&self, name: &str) -> bool {
        self.exported.contains(name)
    }

    /// Returns true while printing at module scope.
    ///
    /// Every statement body renders one indent level deeper, so module-scope
    /// statements are exactly the ones printed at depth zero.
    #[must_use]
    pub fn is_top_level(&self) -> bool {
        self.indent == 0
    }

    /// Enters a class scope.
    pub fn push_class(&mut self, class: &ClassStmt) {
        self.classes.push(ClassScope {
            name: class.name.clone(),
            parent: class.parent.clone(),
        });
    }

    /// Leaves the innermost class scope.
    pub fn pop_class(&mut self) {
        self.classes.pop();
    }

    /// Returns the innermost class scope, if any.
    #[must_use]
    pub fn current_class(&self) -> Option<&ClassScope> {
        self.classes.last()
    }

    /// Renders the buffered lines as source text.
    #[must_use]
    pub fn to_source(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                if line.content.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", INDENT_UNIT.repeat(line.indent), line.content)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn current_line(&mut self) -> &mut Line {
        if self.lines.is_empty() {
            self.lines.push(Line::new(self.indent));
        }
        let index = self.lines.len() - 1;
        &mut self.lines[index]
    }
}
