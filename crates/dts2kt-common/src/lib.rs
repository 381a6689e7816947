//! Common types and utilities for the dts2kt translator.
//!
//! This crate provides foundational types used across all dts2kt crates:
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`)

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostics - scan/parse failures surfaced to callers
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
