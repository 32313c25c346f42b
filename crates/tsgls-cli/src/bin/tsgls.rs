#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use tsgls_cli::args::CliArgs;
use tsgls_cli::config::resolve_config;
use tsgls_cli::driver::{collect_inputs, transform_all, write_outputs};
use tsgls_cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_COMPLAINTS: i32 = 1;

fn main() -> Result<()> {
    // No-op unless TSGLS_LOG or RUST_LOG is set.
    tsgls_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let config = resolve_config(&args, &cwd)?;

    let files = collect_inputs(&args.inputs, &cwd)?;
    if files.is_empty() {
        eprintln!("No {} documents found.", tsgls_cli::driver::DOCUMENT_SUFFIX);
        std::process::exit(EXIT_SUCCESS);
    }
    let results = transform_all(&files, &config)?;

    // GLS goes to stdout unless written to files; complaints then go to
    // stderr so the two never interleave.
    let report_to_stdout = args.out_dir.is_some();
    match &args.out_dir {
        Some(out_dir) => {
            let out_dir = cwd.join(out_dir);
            for path in write_outputs(&results, &config, &out_dir)? {
                println!("{}", path.display());
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            for result in &results {
                stdout
                    .write_all(result.rendered().as_bytes())
                    .context("failed to write output")?;
            }
        }
    }

    let color = if report_to_stdout {
        std::io::stdout().is_terminal()
    } else {
        std::io::stderr().is_terminal()
    };
    let report = Reporter::new(color).render(&results, args.format);
    if !report.is_empty() {
        if report_to_stdout {
            print!("{report}");
        } else {
            eprint!("{report}");
        }
    }

    let has_complaints = results
        .iter()
        .any(|result| !result.output.complaints.is_empty());
    if has_complaints && config.fail_on_complaints {
        std::process::exit(EXIT_COMPLAINTS);
    }
    std::process::exit(EXIT_SUCCESS);
}
