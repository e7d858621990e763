#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

use deklass::Diagnostic;
use deklass_cli::args::CliArgs;
use deklass_cli::driver::{self, RunOutcome};
use deklass_cli::reporter::Reporter;

const EXIT_NO_CLASS: u8 = 1;
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    // Initialize tracing if DEKLASS_LOG or RUST_LOG is set (zero cost otherwise).
    deklass::tracing_config::init_tracing();

    let args = CliArgs::parse();
    match execute(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn execute(args: &CliArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let result = driver::run(args, &cwd)?;

    let color = args
        .pretty
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let reporter = Reporter::new(color);
    let file = result.input.display().to_string();
    if !result.diagnostics.is_empty() {
        eprintln!("{}", reporter.render(&file, &result.diagnostics));
    }

    match result.outcome {
        RunOutcome::Printed(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::Written { path, classes } => {
            tracing::debug!(path = %path.display(), classes, "done");
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::NoClass => {
            let diagnostic = Diagnostic::error("no class declaration found", 0);
            eprintln!("{}", reporter.format_diagnostic(&file, &diagnostic));
            Ok(ExitCode::from(EXIT_NO_CLASS))
        }
    }
}
