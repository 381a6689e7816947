//! Symbol collection: one full pre-order traversal before any rewrite.

use dts2kt_parser::{NodeArena, NodeIndex, NodeKind};
use dts2kt_scanner::TokenStream;
use rustc_hash::FxHashMap;

/// Per-call symbol tables. Built once, read-only afterwards.
///
/// Keys are unqualified names as they appear in the source. Duplicate
/// declarations overwrite earlier ones (last-write-wins); no diagnostic is
/// raised.
#[derive(Default, Debug)]
pub(crate) struct SymbolTables {
    /// Type-alias name → defining `TypeAlias` node.
    pub type_aliases: FxHashMap<String, NodeIndex>,
    /// Restricted-value (enum-like) name → defining node.
    pub restricted_values: FxHashMap<String, NodeIndex>,
    /// Named-type references that carry a generic argument list, keyed by
    /// base name. Bare recurrences of these names are wildcard-erased later.
    pub generic_named_types: FxHashMap<String, NodeIndex>,
}

pub(crate) fn collect(stream: &TokenStream, arena: &NodeArena, root: NodeIndex) -> SymbolTables {
    let mut tables = SymbolTables::default();
    visit(stream, arena, root, &mut tables);
    tracing::debug!(
        type_aliases = tables.type_aliases.len(),
        restricted_values = tables.restricted_values.len(),
        generic_named_types = tables.generic_named_types.len(),
        "collected symbols"
    );
    tables
}

fn visit(stream: &TokenStream, arena: &NodeArena, index: NodeIndex, tables: &mut SymbolTables) {
    match arena.kind(index) {
        Some(NodeKind::TypeAlias) => {
            if let Some(data) = arena.type_alias(index) {
                let (first, last) = arena.token_range(data.name);
                tables
                    .type_aliases
                    .insert(stream.plain_text(first, last), index);
            }
        }
        Some(NodeKind::RestrictedValues) => {
            if let Some(data) = arena.restricted_values(index) {
                let (first, last) = arena.token_range(data.name);
                tables
                    .restricted_values
                    .insert(stream.plain_text(first, last), index);
            }
        }
        Some(NodeKind::NamedType) => {
            if let Some(data) = arena.named_type(index) {
                if data.generic.is_some() {
                    let (first, last) = arena.token_range(data.name);
                    tables
                        .generic_named_types
                        .insert(stream.plain_text(first, last), index);
                }
            }
        }
        _ => {}
    }
    for child in arena.child_nodes(index) {
        visit(stream, arena, child, tables);
    }
}
