use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the tsgls binary.
#[derive(Parser, Debug)]
#[command(
    name = "tsgls",
    version,
    about = "Transform type-checked TypeScript syntax trees into GLS"
)]
pub struct CliArgs {
    /// Document files (`*.tsgls.json`) or directories to search for them.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Write one `.gls` file per document under this directory instead of
    /// printing to stdout.
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Path to a tsgls.json configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Emit source comments as GLS comment lines.
    #[arg(long = "include-comments")]
    pub include_comments: bool,

    /// Indent output with this many spaces per level.
    #[arg(long)]
    pub indent: Option<usize>,

    /// Exit with a failure status when any construct could not be transformed.
    #[arg(long = "fail-on-complaints")]
    pub fail_on_complaints: bool,

    /// Complaint report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text, ignore_case = true)]
    pub format: ReportFormat,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ReportFormat {
    /// `file(line,col): unsupported: reason`
    #[default]
    Text,
    /// A JSON array of complaint objects.
    Json,
}

#[cfg(test)]
#[path = "../tests/args.rs"]
mod tests;
