//! Parser state - type, generic, and parameter parsing.

use super::node::*;
use super::state::ParserState;
use dts2kt_common::Diagnostic;
use dts2kt_scanner::SyntaxKind;

impl ParserState {
    /// Parse a single type: lambda, object shape, literal, or reference.
    pub(crate) fn parse_type(&mut self) -> Result<NodeIndex, Diagnostic> {
        match self.current_kind() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => self.parse_lambda_type(),
            SyntaxKind::OpenBraceToken => self.parse_class_context(),
            SyntaxKind::StringLiteral => {
                let token = self.next_token();
                Ok(self.arena.add_string_type(token))
            }
            SyntaxKind::Identifier => self.parse_named_type(),
            _ => Err(self.error_at_current(format!(
                "expected a type, found {}",
                self.current_kind().describe()
            ))),
        }
    }

    /// Parse a type that may be a union (`A | B | null`).
    pub(crate) fn parse_var_type(&mut self) -> Result<NodeIndex, Diagnostic> {
        let first = self.parse_type()?;
        if self.is_token(SyntaxKind::BarToken) {
            self.parse_union_tail(first)
        } else {
            Ok(first)
        }
    }

    pub(crate) fn parse_union_tail(&mut self, first: NodeIndex) -> Result<NodeIndex, Diagnostic> {
        let mut members = vec![first];
        let mut bar_tokens = Vec::new();
        while let Some(bar) = self.eat(SyntaxKind::BarToken) {
            bar_tokens.push(bar);
            members.push(self.parse_type()?);
        }
        let (first_token, _) = self.arena.token_range(members[0]);
        let (_, last_token) = self.arena.token_range(members[members.len() - 1]);
        Ok(self.arena.add_union_type(
            first_token,
            last_token,
            UnionTypeData {
                members,
                bar_tokens,
            },
        ))
    }

    pub(crate) fn parse_named_type(&mut self) -> Result<NodeIndex, Diagnostic> {
        let name = self.parse_type_name()?;
        let generic = if self.is_token(SyntaxKind::LessThanToken) {
            Some(self.parse_generic()?)
        } else {
            None
        };
        let mut open_bracket_token = None;
        let mut close_bracket_token = None;
        if let Some(open) = self.eat(SyntaxKind::OpenBracketToken) {
            open_bracket_token = Some(open);
            close_bracket_token = Some(self.parse_expected(SyntaxKind::CloseBracketToken)?);
        }
        let (first, _) = self.arena.token_range(name);
        let last = close_bracket_token
            .or_else(|| generic.map(|g| self.arena.token_range(g).1))
            .unwrap_or(self.arena.token_range(name).1);
        Ok(self.arena.add_named_type(
            first,
            last,
            NamedTypeData {
                name,
                generic,
                open_bracket_token,
                close_bracket_token,
            },
        ))
    }

    pub(crate) fn parse_type_name(&mut self) -> Result<NodeIndex, Diagnostic> {
        let mut parts = vec![self.parse_identifier()?];
        let mut dot_tokens = Vec::new();
        while let Some(dot) = self.eat(SyntaxKind::DotToken) {
            dot_tokens.push(dot);
            parts.push(self.parse_identifier()?);
        }
        let (first, _) = self.arena.token_range(parts[0]);
        let (_, last) = self.arena.token_range(parts[parts.len() - 1]);
        Ok(self
            .arena
            .add_type_name(first, last, TypeNameData { parts, dot_tokens }))
    }

    pub(crate) fn parse_identifier(&mut self) -> Result<NodeIndex, Diagnostic> {
        if !self.is_identifier_or_keyword() {
            return Err(self.error_at_current(format!(
                "expected identifier, found {}",
                self.current_kind().describe()
            )));
        }
        let token = self.next_token();
        Ok(self.arena.add_identifier(token))
    }

    pub(crate) fn parse_generic(&mut self) -> Result<NodeIndex, Diagnostic> {
        let less_than_token = self.parse_expected(SyntaxKind::LessThanToken)?;
        let mut params = vec![self.parse_generic_parameter()?];
        while self.eat(SyntaxKind::CommaToken).is_some() {
            params.push(self.parse_generic_parameter()?);
        }
        let greater_than_token = self.parse_expected(SyntaxKind::GreaterThanToken)?;
        Ok(self.arena.add_generic(
            less_than_token,
            greater_than_token,
            GenericData {
                less_than_token,
                params,
                greater_than_token,
            },
        ))
    }

    fn parse_generic_parameter(&mut self) -> Result<NodeIndex, Diagnostic> {
        let base = self.parse_type()?;
        let mut extends_token = None;
        let mut bound = None;
        if let Some(extends) = self.eat(SyntaxKind::ExtendsKeyword) {
            extends_token = Some(extends);
            bound = Some(self.parse_type()?);
        }
        let mut equals_token = None;
        let mut default_ty = None;
        if let Some(equals) = self.eat(SyntaxKind::EqualsToken) {
            equals_token = Some(equals);
            default_ty = Some(self.parse_type()?);
        }
        let (first, _) = self.arena.token_range(base);
        let last = default_ty
            .or(bound)
            .map(|n| self.arena.token_range(n).1)
            .unwrap_or(self.arena.token_range(base).1);
        Ok(self.arena.add_generic_parameter(
            first,
            last,
            GenericParameterData {
                base,
                extends_token,
                bound,
                equals_token,
                default_ty,
            },
        ))
    }

    pub(crate) fn parse_lambda_type(&mut self) -> Result<NodeIndex, Diagnostic> {
        let generic = if self.is_token(SyntaxKind::LessThanToken) {
            Some(self.parse_generic()?)
        } else {
            None
        };
        let open_paren_token = self.parse_expected(SyntaxKind::OpenParenToken)?;
        let params = self.parse_params()?;
        let close_paren_token = self.parse_expected(SyntaxKind::CloseParenToken)?;
        let arrow_token = self.parse_expected(SyntaxKind::EqualsGreaterThanToken)?;
        let return_type = self.parse_var_type()?;
        let first = generic
            .map(|g| self.arena.token_range(g).0)
            .unwrap_or(open_paren_token);
        let (_, last) = self.arena.token_range(return_type);
        Ok(self.arena.add_lambda_type(
            first,
            last,
            LambdaTypeData {
                generic,
                open_paren_token,
                params,
                close_paren_token,
                arrow_token,
                return_type,
            },
        ))
    }

    pub(crate) fn parse_class_context(&mut self) -> Result<NodeIndex, Diagnostic> {
        let open_brace_token = self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken) {
            if self.is_token(SyntaxKind::EndOfFileToken) {
                return Err(self.error_at_current("unterminated object type"));
            }
            members.push(self.parse_variable_definition()?);
        }
        let close_brace_token = self.parse_expected(SyntaxKind::CloseBraceToken)?;
        Ok(self.arena.add_class_context(
            open_brace_token,
            close_brace_token,
            ClassContextData {
                open_brace_token,
                members,
                close_brace_token,
            },
        ))
    }

    fn parse_variable_definition(&mut self) -> Result<NodeIndex, Diagnostic> {
        let name = self.parse_identifier()?;
        let question_token = self.eat(SyntaxKind::QuestionToken);
        let colon_token = self.parse_expected(SyntaxKind::ColonToken)?;
        let ty = self.parse_var_type()?;
        let terminator_token = self
            .eat(SyntaxKind::SemicolonToken)
            .or_else(|| self.eat(SyntaxKind::CommaToken));
        let (first, _) = self.arena.token_range(name);
        let last = terminator_token.unwrap_or(self.arena.token_range(ty).1);
        Ok(self.arena.add_variable_definition(
            first,
            last,
            VariableDefinitionData {
                name,
                question_token,
                colon_token,
                ty,
                terminator_token,
            },
        ))
    }

    pub(crate) fn parse_params(&mut self) -> Result<Vec<NodeIndex>, Diagnostic> {
        let mut params = Vec::new();
        if self.is_token(SyntaxKind::CloseParenToken) {
            return Ok(params);
        }
        loop {
            params.push(self.parse_param()?);
            if self.eat(SyntaxKind::CommaToken).is_none() {
                break;
            }
            // Trailing comma before the closing paren.
            if self.is_token(SyntaxKind::CloseParenToken) {
                break;
            }
        }
        Ok(params)
    }

    fn parse_param(&mut self) -> Result<NodeIndex, Diagnostic> {
        if self.is_token(SyntaxKind::OpenBraceToken) {
            return self.parse_destructuring();
        }
        let name = self.parse_identifier()?;
        let question_token = self.eat(SyntaxKind::QuestionToken);
        let colon_token = self.parse_expected(SyntaxKind::ColonToken)?;
        let ty = self.parse_var_type()?;
        let (first, _) = self.arena.token_range(name);
        let (_, last) = self.arena.token_range(ty);
        Ok(self.arena.add_parameter(
            first,
            last,
            ParameterData {
                name,
                question_token,
                colon_token,
                ty,
            },
        ))
    }

    fn parse_destructuring(&mut self) -> Result<NodeIndex, Diagnostic> {
        let open_brace_token = self.parse_expected(SyntaxKind::OpenBraceToken)?;
        let mut names = vec![self.parse_identifier()?];
        let mut comma_tokens = Vec::new();
        let mut trailing_comma_token = None;
        while let Some(comma) = self.eat(SyntaxKind::CommaToken) {
            if self.is_token(SyntaxKind::CloseBraceToken) {
                trailing_comma_token = Some(comma);
                break;
            }
            comma_tokens.push(comma);
            names.push(self.parse_identifier()?);
        }
        let close_brace_token = self.parse_expected(SyntaxKind::CloseBraceToken)?;
        let colon_token = self.parse_expected(SyntaxKind::ColonToken)?;
        let mut ty = None;
        let mut class_context = None;
        if self.is_token(SyntaxKind::OpenBraceToken) {
            class_context = Some(self.parse_class_context()?);
        } else {
            ty = Some(self.parse_named_type()?);
        }
        let last = class_context
            .or(ty)
            .map(|n| self.arena.token_range(n).1)
            .unwrap_or(colon_token);
        Ok(self.arena.add_destructuring(
            open_brace_token,
            last,
            DestructuringData {
                open_brace_token,
                names,
                comma_tokens,
                trailing_comma_token,
                close_brace_token,
                colon_token,
                ty,
                class_context,
            },
        ))
    }
}
