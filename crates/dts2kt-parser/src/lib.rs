//! Declaration-file parser for the dts2kt translator.
//!
//! This crate provides the syntactic analysis phase:
//! - `ParserState` - Recursive-descent parser over a `TokenStream`
//! - `NodeArena` - Arena-allocated concrete syntax tree, one node kind per
//!   grammar rule, each node carrying its first/last token index
//!
//! Parsing is fail-fast: the first syntax error aborts with a `Diagnostic`
//! and no tree is produced. The tree deliberately keeps every token index
//! (keywords, punctuation, terminators) so a downstream pass can rewrite the
//! original token stream in place.

pub mod parser;

pub use parser::node;
pub use parser::node::{NodeData, NodeIndex, NodeKind};
pub use parser::{NodeArena, ParserState};
