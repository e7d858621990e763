//! Tracing setup for the deklass pipeline.
//!
//! What the crates emit:
//!
//! - `trace`: every scanned token, absorbed stray characters, and each parser
//!   transition (class/method open and close, discarded keyword pairs)
//! - `debug`: one summary per stage (token count, class and diagnostic
//!   counts) inside the `analyze` / `transpile` spans
//! - `warn`: unterminated strings and parser diagnostics as they are recorded
//!
//! `DEKLASS_LOG_FORMAT` picks the output: `text` (flat lines, the default),
//! `tree` (indented under the stage spans, via `tracing-tree`) or `json`
//! (one object per event).
//!
//! ## Quick start
//!
//! ```bash
//! # Every token and parser transition, as a tree
//! DEKLASS_LOG=trace DEKLASS_LOG_FORMAT=tree deklass code.js
//!
//! # Only parser diagnostics
//! DEKLASS_LOG="deklass_parser=warn" deklass code.js
//! ```
//!
//! The subscriber is only initialised when `DEKLASS_LOG` (or `RUST_LOG`) is
//! set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("DEKLASS_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `DEKLASS_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("DEKLASS_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `DEKLASS_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so it never mixes with emitted code on stdout.
pub fn init_tracing() {
    let has_deklass_log = std::env::var("DEKLASS_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_deklass_log && !has_rust_log {
        return;
    }

    let filter = build_filter();

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
