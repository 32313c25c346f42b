//! `tsgls.json` loading and merging with command-line flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use tsgls_ir::CommandCatalog;
use tsgls_transform::TransformOptions;

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "tsgls.json";

/// Contents of a `tsgls.json`. Every key is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    pub base_directory: Option<String>,
    pub output_namespace: Option<String>,
    pub skip_comments: Option<bool>,
    pub indent_unit: Option<String>,
    /// External command vocabulary, relative to the config file.
    pub command_catalog: Option<PathBuf>,
    pub fail_on_complaints: Option<bool>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Result<ConfigFile> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Effective settings for one run.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub options: TransformOptions,
    pub catalog: CommandCatalog,
    pub fail_on_complaints: bool,
}

/// The explicit `--config` path, else a `tsgls.json` next to the first input,
/// else one in `cwd`.
pub fn find_config(args: &CliArgs, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(cwd.join(path));
    }
    let beside_input = args.inputs.first().and_then(|input| {
        let input = cwd.join(input);
        let dir = if input.is_dir() {
            input
        } else {
            input.parent()?.to_path_buf()
        };
        Some(dir.join(CONFIG_FILE_NAME))
    });
    beside_input
        .into_iter()
        .chain(std::iter::once(cwd.join(CONFIG_FILE_NAME)))
        .find(|candidate| candidate.is_file())
}

/// Merge the config file (if any) with flags; flags win.
pub fn resolve_config(args: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
    let (file, file_dir) = match find_config(args, cwd) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let file = ConfigFile::parse(&text)
                .with_context(|| format!("invalid config {}", path.display()))?;
            debug!(path = %path.display(), "loaded config");
            let dir = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
            (file, dir)
        }
        None => (ConfigFile::default(), cwd.to_path_buf()),
    };

    let defaults = TransformOptions::default();
    let mut options = TransformOptions {
        base_directory: file.base_directory.unwrap_or(defaults.base_directory),
        output_namespace: file.output_namespace.unwrap_or(defaults.output_namespace),
        skip_comments: file.skip_comments.unwrap_or(defaults.skip_comments),
        indent_unit: file.indent_unit.unwrap_or(defaults.indent_unit),
    };
    if args.include_comments {
        options.skip_comments = false;
    }
    if let Some(width) = args.indent {
        options.indent_unit = " ".repeat(width);
    }

    let catalog = match file.command_catalog {
        Some(path) => load_catalog(&file_dir.join(path))?,
        None => CommandCatalog::builtin().clone(),
    };

    Ok(ResolvedConfig {
        options,
        catalog,
        fail_on_complaints: args.fail_on_complaints || file.fail_on_complaints.unwrap_or(false),
    })
}

pub fn load_catalog(path: &Path) -> Result<CommandCatalog> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read command catalog {}", path.display()))?;
    CommandCatalog::from_json(&text)
        .with_context(|| format!("invalid command catalog {}", path.display()))
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
