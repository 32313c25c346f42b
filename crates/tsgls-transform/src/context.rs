//! Per-transform state and options.

use crate::aliasing::RootAliaser;
use crate::casing::NameSplitter;
use crate::usage::VariableUsageIndex;
use serde::{Deserialize, Serialize};
use tsgls_ir::DEFAULT_INDENT_UNIT;
use tsgls_syntax::{NodeArena, NodeIndex, TypeQuery};

/// Options for one transform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformOptions {
    /// Leading directory stripped from file paths, such as `src/`.
    pub base_directory: String,
    /// Namespace placed before output paths, such as `Gls`.
    pub output_namespace: String,
    /// Leave comments out of the output.
    pub skip_comments: bool,
    /// Text repeated once per indentation level.
    pub indent_unit: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            base_directory: String::new(),
            output_namespace: String::new(),
            skip_comments: true,
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }
}

impl TransformOptions {
    /// Output path of a source file: `base_directory` stripped, extension
    /// dropped, `output_namespace` prepended.
    ///
    /// Empty, `.` and `..` segments are dropped; the result is always relative
    /// and never climbs out of the directory it is joined onto.
    ///
    /// `src/shapes/point.ts` with base `src/` and namespace `Gls` becomes
    /// `Gls/shapes/point`.
    pub fn output_path(&self, file_name: &str) -> String {
        let normalized = file_name.replace('\\', "/");
        let base = self.base_directory.replace('\\', "/");
        let base = base.trim_end_matches('/');
        let relative = match normalized.strip_prefix(base) {
            Some(rest) if !base.is_empty() && rest.starts_with('/') => rest,
            _ => normalized.as_str(),
        }
        .split('/')
        .filter(|segment| !matches!(*segment, "" | "." | ".."))
        .collect::<Vec<_>>()
        .join("/");
        let relative = relative.as_str();
        let stem = match relative.rfind('.') {
            Some(dot) if dot > relative.rfind('/').map_or(0, |slash| slash + 1) => &relative[..dot],
            _ => relative,
        };
        let stem = stem.strip_suffix(".d").unwrap_or(stem);
        let namespace = self.output_namespace.trim_matches('/');
        if namespace.is_empty() {
            stem.to_string()
        } else {
            format!("{namespace}/{stem}")
        }
    }
}

/// Everything handlers may consult during one traversal.
pub struct VisitorContext<'a> {
    pub arena: &'a NodeArena,
    pub types: &'a dyn TypeQuery,
    pub aliaser: RootAliaser<'a>,
    pub casing: NameSplitter,
    pub usage: VariableUsageIndex,
    pub options: &'a TransformOptions,
}

impl<'a> VisitorContext<'a> {
    pub fn new(
        arena: &'a NodeArena,
        types: &'a dyn TypeQuery,
        root: NodeIndex,
        options: &'a TransformOptions,
    ) -> VisitorContext<'a> {
        VisitorContext {
            arena,
            types,
            aliaser: RootAliaser::new(arena, types),
            casing: NameSplitter::new(),
            usage: VariableUsageIndex::build(arena, root),
            options,
        }
    }
}

#[cfg(test)]
#[path = "../tests/context.rs"]
mod tests;
