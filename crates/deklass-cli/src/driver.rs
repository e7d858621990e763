//! Read a source file, run the pipeline, and place the result.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::args::CliArgs;
use crate::config::{DeklassConfig, ResolvedOptions, find_config, load_config};
use deklass::Diagnostic;

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Emitted code was written to `path`.
    Written { path: PathBuf, classes: usize },
    /// Text for stdout: emitted code, tokens, or declarations.
    Printed(String),
    /// The source declared no class, so there was nothing to emit.
    NoClass,
}

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub outcome: RunOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

/// Insert `suffix` between the file stem and its extension.
///
/// `code.js` becomes `codev2.js`; a path without extension just gains the
/// suffix.
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

fn load_effective_config(args: &CliArgs, cwd: &Path) -> Result<DeklassConfig> {
    let path = match &args.project {
        Some(project) => Some(cwd.join(project)),
        None => find_config(cwd),
    };
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(&path)
        }
        None => Ok(DeklassConfig::default()),
    }
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let config = load_effective_config(args, cwd)?;
    let options = ResolvedOptions::resolve(args, &config);

    let input = cwd.join(&args.file);
    let source = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    info!(path = %input.display(), bytes = source.len(), "read source");

    let result = deklass::analyze(&source);
    let diagnostics = result.diagnostics.clone();

    if args.list_tokens {
        let json = serde_json::to_string_pretty(&result.tokens)
            .context("failed to serialize tokens")?;
        return Ok(RunResult {
            input,
            outcome: RunOutcome::Printed(json + "\n"),
            diagnostics,
        });
    }

    if args.show_ast {
        let json = serde_json::to_string_pretty(&result.declarations)
            .context("failed to serialize declarations")?;
        return Ok(RunResult {
            input,
            outcome: RunOutcome::Printed(json + "\n"),
            diagnostics,
        });
    }

    if result.declarations.is_empty() {
        return Ok(RunResult {
            input,
            outcome: RunOutcome::NoClass,
            diagnostics,
        });
    }

    let (output, classes) = if options.emit_all {
        (result.emit_all(options.emit), result.declarations.len())
    } else {
        let first = result.emit_first(options.emit).unwrap_or_default();
        (first, 1)
    };

    if args.stdout {
        return Ok(RunResult {
            input,
            outcome: RunOutcome::Printed(output),
            diagnostics,
        });
    }

    let path = match &args.out {
        Some(out) => cwd.join(out),
        None => output_path(&input, &options.output_suffix),
    };
    if path == input {
        bail!("output path {} would overwrite the input", path.display());
    }
    std::fs::write(&path, output).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), classes, "wrote output");

    Ok(RunResult {
        input,
        outcome: RunOutcome::Written { path, classes },
        diagnostics,
    })
}
