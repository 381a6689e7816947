//! Parser state - token cursor and expectation helpers.

use super::node::{NodeArena, NodeIndex};
use dts2kt_common::Diagnostic;
use dts2kt_scanner::{SyntaxKind, TokenStream};

pub struct ParserState {
    pub(crate) stream: TokenStream,
    pub(crate) pos: u32,
    pub(crate) arena: NodeArena,
}

impl ParserState {
    pub fn new(stream: TokenStream) -> ParserState {
        ParserState {
            stream,
            pos: 0,
            arena: NodeArena::new(),
        }
    }

    /// Parse one declaration file. Fail-fast: the first syntax error aborts
    /// with no partial tree.
    pub fn parse(mut self) -> Result<(TokenStream, NodeArena, NodeIndex), Diagnostic> {
        let root = self.parse_source_file()?;
        Ok((self.stream, self.arena, root))
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    // =========================================================================
    // Token cursor
    // =========================================================================

    pub(crate) fn current_kind(&self) -> SyntaxKind {
        self.stream.token(self.pos).kind
    }

    pub(crate) fn is_token(&self, kind: SyntaxKind) -> bool {
        self.current_kind() == kind
    }

    /// Keywords are contextual in declaration files; names like `type` or
    /// `from` are valid member and parameter names.
    pub(crate) fn is_identifier_or_keyword(&self) -> bool {
        matches!(
            self.current_kind(),
            SyntaxKind::Identifier
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::TypeKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::FunctionKeyword
                | SyntaxKind::ImportKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::ExtendsKeyword
                | SyntaxKind::FromKeyword
        )
    }

    /// Consume the current token and return its index.
    pub(crate) fn next_token(&mut self) -> u32 {
        let index = self.pos;
        if (self.pos + 1) < self.stream.len() {
            self.pos += 1;
        }
        index
    }

    /// Consume the current token if it matches.
    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> Option<u32> {
        if self.is_token(kind) {
            Some(self.next_token())
        } else {
            None
        }
    }

    /// Consume a token of the given kind or fail with a diagnostic.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> Result<u32, Diagnostic> {
        if self.is_token(kind) {
            Ok(self.next_token())
        } else {
            Err(self.error_at_current(format!(
                "expected {}, found {}",
                kind.describe(),
                self.current_kind().describe()
            )))
        }
    }

    pub(crate) fn error_at_current(&self, message: impl Into<String>) -> Diagnostic {
        let span = self.stream.token(self.pos).span;
        Diagnostic::error(span.start, span.len().max(1), message)
    }
}
