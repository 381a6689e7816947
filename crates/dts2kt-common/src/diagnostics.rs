//! Diagnostics produced by the scanner and parser.
//!
//! Translation is fail-fast: the first error aborts the call, so a
//! diagnostic carries everything a caller needs to report the failure.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(start: u32, length: u32, message: impl Into<String>) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            start,
            length,
            message_text: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error at offset {}: {}", self.start, self.message_text)
    }
}

impl std::error::Error for Diagnostic {}
