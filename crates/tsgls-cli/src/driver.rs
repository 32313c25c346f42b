//! Batch transforms: input discovery, parallel processing and output files.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tsgls_syntax::SourceDocument;
use tsgls_transform::{TransformOutput, transform_source_document};
use walkdir::WalkDir;

use crate::config::ResolvedConfig;

/// Suffix of serialized document files.
pub const DOCUMENT_SUFFIX: &str = ".tsgls.json";
/// Extension of written GLS files.
pub const OUTPUT_EXTENSION: &str = "gls";

/// One transformed document.
#[derive(Debug)]
pub struct DocumentResult {
    /// The document file that was read.
    pub path: PathBuf,
    /// Source file name recorded in the document.
    pub file_name: String,
    pub source_text: String,
    pub output: TransformOutput,
}

impl DocumentResult {
    /// Name used in reports: the recorded source file, else the input path.
    pub fn display_name(&self) -> String {
        if self.file_name.is_empty() {
            self.path.display().to_string()
        } else {
            self.file_name.clone()
        }
    }

    pub fn rendered(&self) -> String {
        let mut text = self.output.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }
}

/// Expand inputs: files are taken as given, directories are walked for
/// `*.tsgls.json`. The result is sorted and free of duplicates.
pub fn collect_inputs(inputs: &[PathBuf], cwd: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let input = cwd.join(input);
        if input.is_dir() {
            for entry in WalkDir::new(&input).follow_links(true) {
                let entry =
                    entry.with_context(|| format!("failed to walk {}", input.display()))?;
                let is_document = entry.file_type().is_file()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.ends_with(DOCUMENT_SUFFIX));
                if is_document {
                    files.push(entry.into_path());
                }
            }
        } else if input.is_file() {
            files.push(input);
        } else {
            anyhow::bail!("input not found: {}", input.display());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

/// Read and transform one document file.
pub fn transform_file(path: &Path, config: &ResolvedConfig) -> Result<DocumentResult> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let document = SourceDocument::from_json(&text)
        .with_context(|| format!("invalid document {}", path.display()))?;
    let output = transform_source_document(&document, &config.catalog, &config.options)
        .with_context(|| format!("failed to transform {}", path.display()))?;
    debug!(
        path = %path.display(),
        lines = output.lines.len(),
        complaints = output.complaints.len(),
        "transformed document"
    );
    Ok(DocumentResult {
        path: path.to_path_buf(),
        file_name: document.file_name,
        source_text: document.arena.source_text,
        output,
    })
}

/// Transform every document in parallel, keeping input order.
pub fn transform_all(files: &[PathBuf], config: &ResolvedConfig) -> Result<Vec<DocumentResult>> {
    let results: Vec<DocumentResult> = files
        .par_iter()
        .map(|path| transform_file(path, config))
        .collect::<Result<_>>()?;
    info!(documents = results.len(), "transformed all documents");
    Ok(results)
}

/// Where a document's GLS goes under `out_dir`.
pub fn output_file(result: &DocumentResult, config: &ResolvedConfig, out_dir: &Path) -> PathBuf {
    let relative = if result.file_name.is_empty() {
        let name = result
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let stem = name.strip_suffix(DOCUMENT_SUFFIX).unwrap_or(name);
        config.options.output_path(stem)
    } else {
        config.options.output_path(&result.file_name)
    };
    out_dir.join(format!("{relative}.{OUTPUT_EXTENSION}"))
}

/// Write one `.gls` file per document. Returns the written paths.
pub fn write_outputs(
    results: &[DocumentResult],
    config: &ResolvedConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(results.len());
    for result in results {
        let path = output_file(result, config, out_dir);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, result.rendered())
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../tests/driver.rs"]
mod tests;
