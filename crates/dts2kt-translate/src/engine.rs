//! Translation engine: per-construct rewrite rules.
//!
//! The engine walks the CST once in post-order (children before parent) and
//! turns each construct into its Kotlin/JS spelling by editing the original
//! token stream through the rewriter. Declarations that have no in-place
//! Kotlin equivalent (plain typealiases, enums) are captured with their
//! pending edits applied and relocated into the support buffer.
//!
//! Firing rules on exit means a parent rule can capture a child's rewritten
//! text through `TokenRewriter::text_of` before deleting or relocating it.

use dts2kt_parser::node::{
    DestructuringData, FunctionData, GenericParameterData, NamedTypeData, ReferenceData,
    RestrictedValuesData, TypeAliasData, UnionTypeData, VariableDefinitionData,
};
use dts2kt_parser::{NodeArena, NodeIndex, NodeKind};
use dts2kt_rewriter::TokenRewriter;
use dts2kt_scanner::TokenStream;
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::symbols::SymbolTables;

/// TypeScript primitive name → Kotlin type name.
static PRIMITIVES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("string", "String");
    map.insert("number", "Number");
    map.insert("boolean", "Boolean");
    map.insert("any", "Any");
    map.insert("void", "Unit");
    map
});

/// Union members that map to Kotlin nullability.
const NULL_TYPES: [&str; 2] = ["null", "undefined"];

/// Kotlin reserved words that must be backtick-escaped to stay referenceable.
const KOTLIN_KEYWORDS: [&str; 3] = ["data", "false", "true"];

fn is_null_type(text: &str) -> bool {
    NULL_TYPES.contains(&text)
}

/// One translation call's engine state. Instantiated fresh per call and
/// discarded on return; nothing is shared across calls.
pub(crate) struct TranslationEngine<'a> {
    stream: &'a TokenStream,
    arena: &'a NodeArena,
    symbols: &'a SymbolTables,
    module_name: &'a str,
    rewriter: TokenRewriter<'a>,
    support: String,
}

impl<'a> TranslationEngine<'a> {
    pub(crate) fn new(
        stream: &'a TokenStream,
        arena: &'a NodeArena,
        symbols: &'a SymbolTables,
        module_name: &'a str,
    ) -> TranslationEngine<'a> {
        TranslationEngine {
            stream,
            arena,
            symbols,
            module_name,
            rewriter: TokenRewriter::new(stream),
            support: String::new(),
        }
    }

    /// Rewrite the whole tree; returns (primary stream, support buffer).
    pub(crate) fn run(mut self, root: NodeIndex) -> (String, String) {
        self.rewrite_node(root);
        (self.rewriter.render(), self.support)
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    fn rewrite_node(&mut self, index: NodeIndex) {
        for child in self.arena.child_nodes(index) {
            self.rewrite_node(child);
        }
        match self.arena.kind(index) {
            Some(NodeKind::SourceFile) => self.rewrite_source_file(index),
            Some(NodeKind::ImportDeclaration) => self.rewrite_import(index),
            Some(NodeKind::TypeAlias) => self.rewrite_type_alias(index),
            Some(NodeKind::RestrictedValues) => self.rewrite_restricted_values(index),
            Some(NodeKind::Reference) => self.rewrite_reference(index),
            Some(NodeKind::FunctionDeclaration) => self.rewrite_function(index),
            Some(NodeKind::VariableDefinition) => self.rewrite_variable_definition(index),
            Some(NodeKind::NamedType) => self.rewrite_named_type(index),
            Some(NodeKind::GenericParameter) => self.rewrite_generic_parameter(index),
            Some(NodeKind::UnionType) => self.rewrite_union_type(index),
            Some(NodeKind::LambdaType) => self.rewrite_lambda_type(index),
            Some(NodeKind::Identifier) => self.rewrite_identifier(index),
            Some(NodeKind::DestructuringParameters) => self.rewrite_destructuring(index),
            _ => {}
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn text_of(&self, index: NodeIndex) -> String {
        let (first, last) = self.arena.token_range(index);
        self.rewriter.text_of(first, last)
    }

    fn original_text(&self, index: NodeIndex) -> String {
        let (first, last) = self.arena.token_range(index);
        self.stream.plain_text(first, last)
    }

    fn delete_node(&mut self, index: NodeIndex) {
        let (first, last) = self.arena.token_range(index);
        self.rewriter.delete(first, last);
    }

    /// Locate the nearest comment trivia attached to the left of the node's
    /// first token. Returns (token index, trivia index).
    fn preceding_comment(&self, index: NodeIndex) -> Option<(u32, u32)> {
        let (first, _) = self.arena.token_range(index);
        let token = self.stream.token(first);
        token
            .leading_trivia
            .iter()
            .enumerate()
            .rev()
            .find(|(_, trivia)| trivia.is_comment())
            .map(|(trivia_index, _)| (first, trivia_index as u32))
    }

    fn comment_text(&self, location: (u32, u32)) -> String {
        let token = self.stream.token(location.0);
        self.stream
            .trivia_text(&token.leading_trivia[location.1 as usize])
            .to_string()
    }

    /// The two-member nullable shape is the only union Kotlin can represent
    /// losslessly. Returns the non-null member when the union has it.
    fn nullable_pair_member(&self, data: &UnionTypeData) -> Option<NodeIndex> {
        if data.members.len() != 2 {
            return None;
        }
        let has_null = data
            .members
            .iter()
            .any(|&m| is_null_type(&self.original_text(m)));
        if !has_null {
            return None;
        }
        data.members
            .iter()
            .copied()
            .find(|&m| !is_null_type(&self.original_text(m)))
    }

    fn union_has_null_member(&self, data: &UnionTypeData) -> bool {
        data.members
            .iter()
            .any(|&m| is_null_type(&self.original_text(m)))
    }

    /// Capture a generic list's rewritten text and hoist it before `target`.
    fn hoist_generic(&mut self, generic: NodeIndex, target: NodeIndex) {
        let (first, last) = self.arena.token_range(generic);
        let text = self.rewriter.text_of(first, last);
        let (target_first, _) = self.arena.token_range(target);
        self.rewriter.insert_before(target_first, format!("{text} "));
        self.rewriter.delete(first, last);
    }

    // =========================================================================
    // Rewrite rules
    // =========================================================================

    /// Module-binding header plus lint suppression, inserted before the
    /// first declaration. This fires after every declaration rule, so
    /// relocated text captured mid-walk never contains the header.
    fn rewrite_source_file(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.source_file(index) else {
            return;
        };
        for semicolon in data.stray_semicolons.clone() {
            self.rewriter.delete_token(semicolon);
        }
        let (first, _) = self.arena.token_range(index);
        self.rewriter.insert_before(
            first,
            format!(
                "@file:JsModule(\"{}\")\n@file:Suppress(\"unused\", \"PropertyName\", \"FunctionName\")\n\n",
                self.module_name
            ),
        );
    }

    /// Cross-module references stay bare names; the import itself goes away.
    fn rewrite_import(&mut self, index: NodeIndex) {
        self.delete_node(index);
    }

    /// Primitive renames and reserved-word escaping, on every identifier.
    fn rewrite_identifier(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.identifier(index) else {
            return;
        };
        let token = data.token;
        let text = self.stream.token_text(token);
        if KOTLIN_KEYWORDS.contains(&text) {
            let escaped = format!("`{text}`");
            self.rewriter.replace_token(token, escaped);
        } else if let Some(primitive) = PRIMITIVES.get(text) {
            self.rewriter.replace_token(token, *primitive);
        }
    }

    /// `T[]` has no Kotlin spelling; wrap the whole reference in `Array<…>`.
    fn rewrite_named_type(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.named_type(index) else {
            return;
        };
        let (Some(open), Some(close)) = (data.open_bracket_token, data.close_bracket_token) else {
            return;
        };
        let (first, last) = self.arena.token_range(index);
        self.rewriter.delete_token(open);
        self.rewriter.delete_token(close);
        self.rewriter.insert_before(first, "Array<");
        self.rewriter.insert_after(last, ">");
    }

    /// Object members become mutable external bindings; an optional marker
    /// moves from the name to the type as Kotlin nullability.
    fn rewrite_variable_definition(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.variable_definition(index) else {
            return;
        };
        let data: VariableDefinitionData = data.clone();
        let (name_first, _) = self.arena.token_range(data.name);
        self.rewriter.insert_before(name_first, "var ");
        if let Some(terminator) = data.terminator_token {
            self.rewriter.delete_token(terminator);
        }
        if let Some(question) = data.question_token {
            self.rewriter.delete_token(question);
            if !self.is_collapsed_nullable_union(data.ty) {
                let (_, ty_last) = self.arena.token_range(data.ty);
                self.rewriter.insert_after(ty_last, "?");
            }
        }
    }

    /// A nullable two-member union already carries its own `?` after the
    /// union rule collapsed it.
    fn is_collapsed_nullable_union(&self, ty: NodeIndex) -> bool {
        match self.arena.union_type(ty) {
            Some(union) => self.nullable_pair_member(union).is_some(),
            None => false,
        }
    }

    /// Defaults have no Kotlin equivalent, bounds become `:`, and tracked
    /// generic names referenced bare get an explicit `<*>` — Kotlin forbids
    /// referencing a generic type without arguments.
    fn rewrite_generic_parameter(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.generic_parameter(index) else {
            return;
        };
        let data: GenericParameterData = data.clone();
        if let Some(equals) = data.equals_token {
            let (_, last) = self.arena.token_range(index);
            self.rewriter.delete(equals, last);
        }
        if let Some(extends) = data.extends_token {
            self.rewriter.replace_token(extends, ":");
        }
        for ty in [Some(data.base), data.bound].into_iter().flatten() {
            self.wildcard_erase_bare_generic(ty);
        }
    }

    fn wildcard_erase_bare_generic(&mut self, ty: NodeIndex) {
        let Some(named) = self.arena.named_type(ty) else {
            return;
        };
        let named: NamedTypeData = named.clone();
        if named.generic.is_some() {
            return;
        }
        let name_text = self.original_text(named.name);
        if !self.symbols.generic_named_types.contains_key(&name_text) {
            return;
        }
        let (first, last) = self.arena.token_range(named.name);
        let rewritten = self.rewriter.text_of(first, last);
        self.rewriter.replace(first, last, format!("{rewritten}<*>"));
    }

    /// The only lossless union: two members, one null-like. Everything else
    /// is handled (and documented) by the construct that owns the union.
    fn rewrite_union_type(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.union_type(index) else {
            return;
        };
        let data = data.clone();
        if let Some(non_null) = self.nullable_pair_member(&data) {
            let collapsed = format!("{}?", self.text_of(non_null));
            let (first, last) = self.arena.token_range(index);
            self.rewriter.replace(first, last, collapsed);
        }
    }

    fn rewrite_lambda_type(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.lambda_type(index) else {
            return;
        };
        self.rewriter.replace_token(data.arrow_token, "->");
    }

    /// `declare const` becomes `external val` — or `external fun` when the
    /// declared type is a function signature.
    fn rewrite_reference(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.reference(index) else {
            return;
        };
        let data: ReferenceData = data.clone();
        if let Some(semicolon) = data.semicolon_token {
            self.rewriter.delete_token(semicolon);
        }
        if let Some(export) = data.export_token {
            self.rewriter.delete_token(export);
        }
        match self.arena.lambda_type(data.ty).cloned() {
            Some(lambda) => {
                self.rewriter
                    .replace(data.declare_token, data.const_token, "external fun");
                self.rewriter.delete_token(data.colon_token);
                self.rewriter.delete_token(lambda.arrow_token);
                self.rewriter.insert_after(lambda.arrow_token, ":");
                if let Some(generic) = lambda.generic {
                    self.hoist_generic(generic, data.name);
                }
            }
            None => {
                self.rewriter
                    .replace(data.declare_token, data.const_token, "external val");
            }
        }
    }

    fn rewrite_function(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.function(index) else {
            return;
        };
        let data: FunctionData = data.clone();
        if let Some(semicolon) = data.semicolon_token {
            self.rewriter.delete_token(semicolon);
        }
        if let Some(export) = data.export_token {
            self.rewriter.delete_token(export);
        }
        self.rewriter
            .replace(data.declare_token, data.function_token, "external fun");
        if let Some(generic) = data.generic {
            self.hoist_generic(generic, data.name);
        }

        // Widen union-typed parameters and return types to Any; the original
        // union survives as a doc comment above the declaration. The nullable
        // two-member shape is already collapsed losslessly and is skipped.
        let mut unions = Vec::new();
        if self.arena.kind(data.return_type) == Some(NodeKind::UnionType) {
            unions.push(data.return_type);
        }
        for &param in &data.params {
            if let Some(parameter) = self.arena.parameter(param) {
                if self.arena.kind(parameter.ty) == Some(NodeKind::UnionType) {
                    unions.push(parameter.ty);
                }
            }
        }
        let (declaration_first, _) = self.arena.token_range(index);
        for union in unions {
            let Some(union_data) = self.arena.union_type(union).cloned() else {
                continue;
            };
            if self.nullable_pair_member(&union_data).is_some() {
                continue;
            }
            let modifier = if self.union_has_null_member(&union_data) {
                "?"
            } else {
                ""
            };
            let original = self.text_of(union);
            self.rewriter
                .insert_before(declaration_first, format!("/** Any = {original} */\n"));
            let (first, last) = self.arena.token_range(union);
            self.rewriter.replace(first, last, format!("Any{modifier}"));
        }
    }

    fn rewrite_type_alias(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.type_alias(index) else {
            return;
        };
        let data: TypeAliasData = data.clone();
        if let Some(semicolon) = data.semicolon_token {
            self.rewriter.delete_token(semicolon);
        }
        if let Some(export) = data.export_token {
            self.rewriter.delete_token(export);
        }

        if !data.classes.is_empty() {
            self.rewrite_alias_as_interface(&data);
        } else if let Some(generic) = self.class_wrapping_generic(&data) {
            // A generic reference wrapping exactly one object shape: strip
            // the angle brackets and let the wrapper become the supertype.
            let Some(generic_data) = self.arena.generic(generic) else {
                return;
            };
            self.rewriter.replace_token(data.equals_token, ":");
            self.rewriter.delete_token(generic_data.less_than_token);
            self.rewriter.delete_token(generic_data.greater_than_token);
            self.rewriter
                .replace(data.declare_token, data.type_token, "external interface");
        } else {
            self.relocate_alias_as_typealias(index, &data);
        }
    }

    /// An alias over an object shape becomes an external interface; `&`-joined
    /// named types turn into its supertype list.
    fn rewrite_alias_as_interface(&mut self, data: &TypeAliasData) {
        self.rewriter
            .replace(data.declare_token, data.type_token, "external interface");
        if !data.ampersand_tokens.is_empty() {
            self.rewriter.replace_token(data.equals_token, ":");
            for &ampersand in &data.ampersand_tokens {
                self.rewriter.delete_token(ampersand);
            }
        } else {
            self.rewriter.delete_token(data.equals_token);
        }
        let supertypes = data
            .types
            .iter()
            .map(|&ty| self.original_text(ty))
            .collect::<Vec<_>>()
            .join(",");
        if !supertypes.is_empty() {
            self.rewriter.insert_after(data.equals_token, supertypes);
        }
        for &ty in &data.types {
            self.delete_node(ty);
        }
    }

    /// `Wrapper<{ … }>` on the right-hand side of an alias.
    fn class_wrapping_generic(&self, data: &TypeAliasData) -> Option<NodeIndex> {
        let last_type = *data.types.last()?;
        let named = self.arena.named_type(last_type)?;
        let generic = named.generic?;
        let generic_data = self.arena.generic(generic)?;
        if generic_data.params.len() != 1 {
            return None;
        }
        let param = self.arena.generic_parameter(generic_data.params[0])?;
        if self.arena.kind(param.base) == Some(NodeKind::ClassContext) {
            Some(generic)
        } else {
            None
        }
    }

    /// Every other alias becomes a `typealias` and moves to the support
    /// artifact together with its doc comment; a union right-hand side is
    /// widened to Any with the original union kept readable in a comment.
    fn relocate_alias_as_typealias(&mut self, index: NodeIndex, data: &TypeAliasData) {
        let comment = self.preceding_comment(index);
        self.rewriter
            .replace(data.declare_token, data.type_token, "typealias");
        if let Some(location) = comment {
            let text = self.comment_text(location);
            self.support.push_str(&text);
            self.support.push('\n');
            self.rewriter.clear_trivia(location.0, location.1);
        }
        if let Some(union) = data.union {
            if let Some(union_data) = self.arena.union_type(union).cloned() {
                if self.nullable_pair_member(&union_data).is_none() {
                    let original = self.text_of(union);
                    self.support
                        .push_str(&format!("/** Any = {original} */\n"));
                    let (first, last) = self.arena.token_range(union);
                    self.rewriter.replace(first, last, "Any");
                }
            }
        }
        let relocated = self.text_of(index);
        tracing::debug!(alias = %relocated.lines().next().unwrap_or(""), "relocating typealias to support");
        self.support.push_str(&relocated);
        self.support.push('\n');
        self.delete_node(index);
    }

    /// A closed string set becomes an enum class, relocated to the support
    /// artifact together with a machine-readable literal mapping some
    /// Kotlin/JS runtimes need to bridge enum constants to wire values.
    fn rewrite_restricted_values(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.restricted_values(index) else {
            return;
        };
        let data: RestrictedValuesData = data.clone();
        if let Some(semicolon) = data.semicolon_token {
            self.rewriter.delete_token(semicolon);
        }
        if let Some(export) = data.export_token {
            self.rewriter.delete_token(export);
        }
        self.rewriter
            .replace(data.declare_token, data.type_token, "enum class");
        self.rewriter.replace_token(data.equals_token, "{");
        let mut members = Vec::new();
        for &string_token in &data.string_tokens {
            let raw = self.stream.token_text(string_token);
            let mut content = raw
                .trim_matches('"')
                .trim_matches('\'')
                .to_string();
            if KOTLIN_KEYWORDS.contains(&content.as_str()) {
                content = format!("`{content}`");
            }
            self.rewriter.replace_token(string_token, content.clone());
            members.push(content);
        }
        for &bar in &data.bar_tokens {
            self.rewriter.replace_token(bar, ",");
        }

        let mapping = members
            .iter()
            .map(|member| format!("{member}: '{member}'"))
            .collect::<Vec<_>>()
            .join(",");
        if let Some(location) = self.preceding_comment(index) {
            let text = self.comment_text(location);
            self.support.push_str(&text);
            self.support.push('\n');
            self.rewriter.clear_trivia(location.0, location.1);
        }
        self.support.push_str("@Suppress(\"NAME_CONTAINS_ILLEGAL_CHARS\")\n");
        self.support.push_str("// language=JavaScript\n");
        self.support
            .push_str(&format!("@JsName(\"\"\"(/*union*/{{{mapping}}}/*union*/)\"\"\")\n"));
        let relocated = self.text_of(index);
        self.support.push_str(&relocated);
        self.support.push_str("}\n");
        self.delete_node(index);
    }

    /// A destructuring parameter flattens into ordinary positional
    /// parameters, each annotated with its field's type.
    fn rewrite_destructuring(&mut self, index: NodeIndex) {
        let Some(data) = self.arena.destructuring(index) else {
            return;
        };
        let data: DestructuringData = data.clone();

        if let Some(class_context) = data.class_context {
            let members = self
                .arena
                .class_context(class_context)
                .map(|c| c.members.clone())
                .unwrap_or_default();
            for &name in &data.names {
                let field = self.original_text(name);
                let member_ty = members.iter().find_map(|&member| {
                    let member_data = self.arena.variable_definition(member)?;
                    (self.original_text(member_data.name) == field).then_some(member_data.ty)
                });
                match member_ty {
                    Some(ty) => self.annotate_destructured_name(name, ty),
                    None => tracing::warn!(
                        parameter = %field,
                        "destructured name missing from inline object type; left unannotated"
                    ),
                }
            }
            self.delete_node(class_context);
        } else if let Some(ty) = data.ty {
            let alias_name = self
                .arena
                .named_type(ty)
                .map(|named| self.original_text(named.name))
                .unwrap_or_default();
            for &name in &data.names {
                let field = self.original_text(name);
                let mut visited = FxHashSet::default();
                match self.resolve_destructured_field(&alias_name, &field, &mut visited) {
                    Some(ty_text) => {
                        let (_, name_last) = self.arena.token_range(name);
                        self.rewriter.insert_after(name_last, format!(":{ty_text}"));
                    }
                    None => tracing::warn!(
                        parameter = %field,
                        alias = %alias_name,
                        "destructured parameter type not found in alias chain; left unannotated"
                    ),
                }
            }
            self.delete_node(ty);
        }

        self.rewriter.delete_token(data.open_brace_token);
        self.rewriter.delete_token(data.close_brace_token);
        if let Some(trailing_comma) = data.trailing_comma_token {
            self.rewriter.delete_token(trailing_comma);
        }
        self.rewriter.delete_token(data.colon_token);
    }

    fn annotate_destructured_name(&mut self, name: NodeIndex, ty: NodeIndex) {
        let ty_text = self.text_of(ty);
        let (_, name_last) = self.arena.token_range(name);
        self.rewriter.insert_after(name_last, format!(":{ty_text}"));
    }

    /// Depth-first search for a field's type through the alias "extends"
    /// chain (intersection named types), visited set guarding cycles.
    fn resolve_destructured_field(
        &self,
        alias: &str,
        field: &str,
        visited: &mut FxHashSet<String>,
    ) -> Option<String> {
        if !visited.insert(alias.to_string()) {
            return None;
        }
        let &alias_index = self.symbols.type_aliases.get(alias)?;
        let data = self.arena.type_alias(alias_index)?;
        for &class_context in &data.classes {
            let members = self.arena.class_context(class_context)?.members.clone();
            for member in members {
                let member_data = self.arena.variable_definition(member)?;
                if self.original_text(member_data.name) == field {
                    return Some(self.text_of(member_data.ty));
                }
            }
        }
        for &supertype in &data.types {
            let Some(named) = self.arena.named_type(supertype) else {
                continue;
            };
            let supertype_name = self.original_text(named.name);
            if let Some(found) = self.resolve_destructured_field(&supertype_name, field, visited) {
                return Some(found);
            }
        }
        None
    }
}
