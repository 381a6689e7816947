//! Core translation engine: TypeScript ambient declarations to Kotlin/JS
//! external declarations.
//!
//! One call to [`Translator::translate`] processes one declaration module
//! end-to-end: scan, parse, one symbol-collection traversal, one rewrite
//! traversal, then partitioning into a primary artifact and (when anything
//! was relocated) a support artifact. All intermediate state lives for the
//! duration of that call only; calls share nothing.

mod engine;
pub mod module_name;
mod partition;
mod symbols;

pub use module_name::normalize_module_name;

use dts2kt_common::Diagnostic;
use dts2kt_parser::ParserState;
use dts2kt_scanner::ScannerState;
use serde::Serialize;

/// One generated artifact: Kotlin source plus its deterministic file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationResult {
    pub code: String,
    pub file_name: String,
}

/// Translation failure. Parsing is fail-fast: a declaration file the grammar
/// cannot accept yields no partial artifacts, because the output is consumed
/// as authoritative type information.
#[derive(Debug)]
pub enum TranslateError {
    Parse(Diagnostic),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::Parse(diagnostic) => {
                write!(f, "declaration parsing failed: {diagnostic}")
            }
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Parse(diagnostic) => Some(diagnostic),
        }
    }
}

impl From<Diagnostic> for TranslateError {
    fn from(diagnostic: Diagnostic) -> Self {
        TranslateError::Parse(diagnostic)
    }
}

/// The translator. Stateless; every call runs against fresh per-call state,
/// so one instance can serve many modules (or threads) safely.
#[derive(Default)]
pub struct Translator;

impl Translator {
    pub fn new() -> Translator {
        Translator
    }

    /// Translate one declaration module. Returns one result (primary) or two
    /// (primary then support), primary always first.
    pub fn translate(
        &self,
        source: &str,
        module_name: &str,
    ) -> Result<Vec<TranslationResult>, TranslateError> {
        tracing::debug!(module = %module_name, bytes = source.len(), "translating module");
        let stream = ScannerState::new(source.to_string()).tokenize()?;
        let (stream, arena, root) = ParserState::new(stream).parse()?;
        let tables = symbols::collect(&stream, &arena, root);
        let engine = engine::TranslationEngine::new(&stream, &arena, &tables, module_name);
        let (primary, support) = engine.run(root);
        Ok(partition::build_results(primary, support, module_name))
    }
}

/// Convenience wrapper around a throwaway [`Translator`].
pub fn translate(
    source: &str,
    module_name: &str,
) -> Result<Vec<TranslationResult>, TranslateError> {
    Translator::new().translate(source, module_name)
}
