//! Resolution of module identifiers into import paths.

use vellum_core::{Error, ModuleId, Result};

/// Resolves the path one module uses to import another.
///
/// Implementations must behave as pure functions: same inputs, same output,
/// no side effects. The emitter calls `resolve` once per distinct imported
/// module; a failure aborts the whole emission.
pub trait ImportResolver {
    fn resolve(&self, from: &ModuleId, to: &ModuleId) -> Result<String>;
}

/// Resolves imports relative to the importing module, treating identifiers
/// as `/`-separated logical paths.
///
/// `app/a` importing `app/b` yields `./b`; `app/ui/list` importing `app/b`
/// yields `../b`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RelativeImportResolver;

impl ImportResolver for RelativeImportResolver {
    fn resolve(&self, from: &ModuleId, to: &ModuleId) -> Result<String> {
        if to.as_str().is_empty() {
            return Err(Error::UnresolvedImport {
                from: from.to_string(),
                to: to.to_string(),
                reason: "empty module identifier".to_string(),
            });
        }

        let from_segments: Vec<&str> = from.as_str().split('/').collect();
        // The last segment names the module file; paths are relative to its
        // containing directory.
        let from_dir = &from_segments[..from_segments.len() - 1];
        let to_segments: Vec<&str> = to.as_str().split('/').collect();

        let common = from_dir
            .iter()
            .zip(to_segments.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let ups = from_dir.len() - common;

        let mut path = String::new();
        if ups == 0 {
            path.push_str("./");
        } else {
            for _ in 0..ups {
                path.push_str("../");
            }
        }
        path.push_str(&to_segments[common..].join("/"));
        Ok(path)
    }
}
