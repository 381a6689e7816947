//! Parser state - top-level declaration parsing.

use super::node::*;
use super::state::ParserState;
use dts2kt_common::Diagnostic;
use dts2kt_scanner::SyntaxKind;

impl ParserState {
    pub(crate) fn parse_source_file(&mut self) -> Result<NodeIndex, Diagnostic> {
        tracing::trace!("parse_source_file");
        let first = self.pos;
        let mut statements = Vec::new();
        let mut stray_semicolons = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            if self.is_token(SyntaxKind::SemicolonToken) {
                stray_semicolons.push(self.next_token());
                continue;
            }
            statements.push(self.parse_declaration()?);
        }
        let last = self.pos;
        Ok(self.arena.add_source_file(
            first,
            last,
            SourceFileData {
                statements,
                stray_semicolons,
            },
        ))
    }

    fn parse_declaration(&mut self) -> Result<NodeIndex, Diagnostic> {
        if self.is_token(SyntaxKind::ImportKeyword) {
            return self.parse_import_declaration();
        }
        let export_token = self.eat(SyntaxKind::ExportKeyword);
        let declare_token = self.parse_expected(SyntaxKind::DeclareKeyword)?;
        match self.current_kind() {
            SyntaxKind::TypeKeyword => self.parse_type_declaration(export_token, declare_token),
            SyntaxKind::ConstKeyword => self.parse_reference(export_token, declare_token),
            SyntaxKind::FunctionKeyword => self.parse_function(export_token, declare_token),
            _ => Err(self.error_at_current(format!(
                "expected 'type', 'const' or 'function' after 'declare', found {}",
                self.current_kind().describe()
            ))),
        }
    }

    /// Imports are opaque: everything through the terminating `;` is one
    /// node, deleted wholesale by the rewrite pass.
    fn parse_import_declaration(&mut self) -> Result<NodeIndex, Diagnostic> {
        let first = self.parse_expected(SyntaxKind::ImportKeyword)?;
        let mut last = first;
        loop {
            match self.current_kind() {
                SyntaxKind::SemicolonToken => {
                    last = self.next_token();
                    break;
                }
                SyntaxKind::EndOfFileToken => break,
                _ => last = self.next_token(),
            }
        }
        Ok(self.arena.add_import(first, last))
    }

    /// `declare type …` is either a type alias or, when the right-hand side
    /// is a bare set of string literals, a restricted-values declaration.
    fn parse_type_declaration(
        &mut self,
        export_token: Option<u32>,
        declare_token: u32,
    ) -> Result<NodeIndex, Diagnostic> {
        tracing::trace!(pos = self.pos, "parse_type_declaration");
        let type_token = self.parse_expected(SyntaxKind::TypeKeyword)?;
        let name = self.parse_type_name()?;
        let generic = if self.is_token(SyntaxKind::LessThanToken) {
            Some(self.parse_generic()?)
        } else {
            None
        };
        let equals_token = self.parse_expected(SyntaxKind::EqualsToken)?;
        let first = export_token.unwrap_or(declare_token);

        if self.is_token(SyntaxKind::StringLiteral) && generic.is_none() {
            let name = self.single_identifier_of(name)?;
            return self.parse_restricted_values_tail(
                first,
                export_token,
                declare_token,
                type_token,
                name,
                equals_token,
            );
        }

        let mut types = Vec::new();
        let mut classes = Vec::new();
        let mut ampersand_tokens = Vec::new();
        let mut union = None;

        let first_element = self.parse_type()?;
        if self.is_token(SyntaxKind::AmpersandToken) {
            self.push_intersection_member(first_element, &mut types, &mut classes);
            while let Some(amp) = self.eat(SyntaxKind::AmpersandToken) {
                ampersand_tokens.push(amp);
                let element = self.parse_type()?;
                self.push_intersection_member(element, &mut types, &mut classes);
            }
        } else if self.is_token(SyntaxKind::BarToken) {
            union = Some(self.parse_union_tail(first_element)?);
        } else {
            self.push_intersection_member(first_element, &mut types, &mut classes);
        }

        let semicolon_token = self.eat(SyntaxKind::SemicolonToken);
        let last = semicolon_token.unwrap_or(self.pos.saturating_sub(1));
        Ok(self.arena.add_type_alias(
            first,
            last,
            TypeAliasData {
                export_token,
                declare_token,
                type_token,
                name,
                generic,
                equals_token,
                types,
                classes,
                ampersand_tokens,
                union,
                semicolon_token,
            },
        ))
    }

    fn push_intersection_member(
        &self,
        element: NodeIndex,
        types: &mut Vec<NodeIndex>,
        classes: &mut Vec<NodeIndex>,
    ) {
        if self.arena.kind(element) == Some(NodeKind::ClassContext) {
            classes.push(element);
        } else {
            types.push(element);
        }
    }

    /// The alias left-hand side of a restricted-values declaration must be a
    /// plain identifier.
    fn single_identifier_of(&self, type_name: NodeIndex) -> Result<NodeIndex, Diagnostic> {
        let Some(data) = self.arena.type_name(type_name) else {
            return Err(self.error_at_current("malformed type alias name"));
        };
        if data.parts.len() == 1 {
            Ok(data.parts[0])
        } else {
            Err(self.error_at_current("a string-literal set cannot name a qualified type"))
        }
    }

    fn parse_restricted_values_tail(
        &mut self,
        first: u32,
        export_token: Option<u32>,
        declare_token: u32,
        type_token: u32,
        name: NodeIndex,
        equals_token: u32,
    ) -> Result<NodeIndex, Diagnostic> {
        let mut string_tokens = vec![self.parse_expected(SyntaxKind::StringLiteral)?];
        let mut bar_tokens = Vec::new();
        while let Some(bar) = self.eat(SyntaxKind::BarToken) {
            bar_tokens.push(bar);
            string_tokens.push(self.parse_expected(SyntaxKind::StringLiteral)?);
        }
        let semicolon_token = self.eat(SyntaxKind::SemicolonToken);
        let last = semicolon_token.unwrap_or(self.pos.saturating_sub(1));
        Ok(self.arena.add_restricted_values(
            first,
            last,
            RestrictedValuesData {
                export_token,
                declare_token,
                type_token,
                name,
                equals_token,
                string_tokens,
                bar_tokens,
                semicolon_token,
            },
        ))
    }

    fn parse_reference(
        &mut self,
        export_token: Option<u32>,
        declare_token: u32,
    ) -> Result<NodeIndex, Diagnostic> {
        tracing::trace!(pos = self.pos, "parse_reference");
        let const_token = self.parse_expected(SyntaxKind::ConstKeyword)?;
        let name = self.parse_identifier()?;
        let colon_token = self.parse_expected(SyntaxKind::ColonToken)?;
        let ty = self.parse_var_type()?;
        let semicolon_token = self.eat(SyntaxKind::SemicolonToken);
        let first = export_token.unwrap_or(declare_token);
        let last = semicolon_token.unwrap_or(self.pos.saturating_sub(1));
        Ok(self.arena.add_reference(
            first,
            last,
            ReferenceData {
                export_token,
                declare_token,
                const_token,
                name,
                colon_token,
                ty,
                semicolon_token,
            },
        ))
    }

    fn parse_function(
        &mut self,
        export_token: Option<u32>,
        declare_token: u32,
    ) -> Result<NodeIndex, Diagnostic> {
        tracing::trace!(pos = self.pos, "parse_function");
        let function_token = self.parse_expected(SyntaxKind::FunctionKeyword)?;
        let name = self.parse_identifier()?;
        let generic = if self.is_token(SyntaxKind::LessThanToken) {
            Some(self.parse_generic()?)
        } else {
            None
        };
        let open_paren_token = self.parse_expected(SyntaxKind::OpenParenToken)?;
        let params = self.parse_params()?;
        let close_paren_token = self.parse_expected(SyntaxKind::CloseParenToken)?;
        let colon_token = self.parse_expected(SyntaxKind::ColonToken)?;
        let return_type = self.parse_var_type()?;
        let semicolon_token = self.eat(SyntaxKind::SemicolonToken);
        let first = export_token.unwrap_or(declare_token);
        let last = semicolon_token.unwrap_or(self.pos.saturating_sub(1));
        Ok(self.arena.add_function(
            first,
            last,
            FunctionData {
                export_token,
                declare_token,
                function_token,
                name,
                generic,
                open_paren_token,
                params,
                close_paren_token,
                colon_token,
                return_type,
                semicolon_token,
            },
        ))
    }
}
