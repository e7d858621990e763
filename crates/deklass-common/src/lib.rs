//! Common types and utilities for the deklass pipeline.
//!
//! This crate provides foundational types used across all deklass crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, diagnostic codes)
//! - Common enums (`NewLineKind`)

// Diagnostics collected by the scanner and parser
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Common types shared by the emitter and the CLI
pub mod common;
pub use common::NewLineKind;
