//! Command-line interface for the dts2kt translator.
//!
//! The binary is a thin collaborator around the core: it reads one `.d.ts`
//! file, runs the translation, and writes the resulting Kotlin artifacts (or
//! prints them as JSON).

pub mod args;
pub mod driver;
pub mod logging;
