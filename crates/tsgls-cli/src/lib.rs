//! Command-line driver: argument parsing, configuration, batch transforms
//! and complaint reporting for the `tsgls` binary.

pub mod args;
pub mod config;
pub mod driver;
pub mod reporter;
pub mod tracing_config;
