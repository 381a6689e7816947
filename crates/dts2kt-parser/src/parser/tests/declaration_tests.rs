//! Tests for declaration-file parsing: node shapes and fail-fast behavior.

use crate::parser::node::NodeKind;
use crate::parser::ParserState;
use dts2kt_scanner::ScannerState;

fn parse(source: &str) -> (dts2kt_scanner::TokenStream, crate::parser::NodeArena, crate::NodeIndex) {
    let stream = ScannerState::new(source.to_string())
        .tokenize()
        .expect("scan should succeed");
    ParserState::new(stream).parse().expect("parse should succeed")
}

fn parse_err(source: &str) -> dts2kt_common::Diagnostic {
    let stream = ScannerState::new(source.to_string())
        .tokenize()
        .expect("scan should succeed");
    ParserState::new(stream)
        .parse()
        .expect_err("parse should fail")
}

#[test]
fn test_parse_interface_like_alias() {
    let source = r#"declare type Point = {
    column: number;
    row: number;
};"#;
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    assert_eq!(file.statements.len(), 1);
    let alias = arena.type_alias(file.statements[0]).expect("a type alias");
    assert_eq!(alias.classes.len(), 1);
    assert!(alias.types.is_empty());
    assert!(alias.union.is_none());
    let class = arena.class_context(alias.classes[0]).unwrap();
    assert_eq!(class.members.len(), 2);
}

#[test]
fn test_parse_intersection_alias_keeps_ampersands() {
    let source = "declare type CellDescriptor<Cell> = Point & { data?: Cell };";
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let alias = arena.type_alias(file.statements[0]).unwrap();
    assert_eq!(alias.types.len(), 1);
    assert_eq!(alias.classes.len(), 1);
    assert_eq!(alias.ampersand_tokens.len(), 1);
    assert!(alias.generic.is_some());
}

#[test]
fn test_parse_restricted_values() {
    let source = r#"declare type Mode = "view" | "edit";"#;
    let (stream, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let restricted = arena
        .restricted_values(file.statements[0])
        .expect("a restricted-values declaration");
    assert_eq!(restricted.string_tokens.len(), 2);
    assert_eq!(restricted.bar_tokens.len(), 1);
    assert_eq!(stream.token_text(restricted.string_tokens[0]), "\"view\"");
}

#[test]
fn test_string_rhs_with_generic_is_a_plain_alias() {
    // A generic left-hand side cannot be a restricted-values declaration.
    let source = r#"declare type Wrapped<T> = "a" | "b";"#;
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let alias = arena.type_alias(file.statements[0]).expect("a type alias");
    assert!(alias.union.is_some());
}

#[test]
fn test_parse_union_alias() {
    let source = "declare type FormulaParseResult = string | boolean | number;";
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let alias = arena.type_alias(file.statements[0]).unwrap();
    let union = arena.union_type(alias.union.unwrap()).unwrap();
    assert_eq!(union.members.len(), 3);
    assert_eq!(union.bar_tokens.len(), 2);
}

#[test]
fn test_parse_reference_with_lambda() {
    let source = "declare const DataViewer: <Cell>(cell: Cell) => Element;";
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let reference = arena.reference(file.statements[0]).unwrap();
    assert_eq!(arena.kind(reference.ty), Some(NodeKind::LambdaType));
    let lambda = arena.lambda_type(reference.ty).unwrap();
    assert!(lambda.generic.is_some());
    assert_eq!(lambda.params.len(), 1);
}

#[test]
fn test_parse_function_with_generic_and_union_return() {
    let source = "declare function createEmpty<T>(rows: number): T | null;";
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let function = arena.function(file.statements[0]).unwrap();
    assert!(function.generic.is_some());
    assert_eq!(function.params.len(), 1);
    assert_eq!(arena.kind(function.return_type), Some(NodeKind::UnionType));
}

#[test]
fn test_parse_destructuring_parameter() {
    let source = "declare function f({ cell, parser }: Props): void;";
    let (stream, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let function = arena.function(file.statements[0]).unwrap();
    let destructuring = arena.destructuring(function.params[0]).unwrap();
    assert_eq!(destructuring.names.len(), 2);
    assert_eq!(destructuring.comma_tokens.len(), 1);
    assert!(destructuring.trailing_comma_token.is_none());
    assert!(destructuring.ty.is_some());
    assert!(destructuring.class_context.is_none());
    let name = arena.identifier(destructuring.names[0]).unwrap();
    assert_eq!(stream.token_text(name.token), "cell");
}

#[test]
fn test_parse_destructuring_with_inline_shape_and_trailing_comma() {
    let source = "declare function f({ a, b, }: { a: string; b: number }): void;";
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let function = arena.function(file.statements[0]).unwrap();
    let destructuring = arena.destructuring(function.params[0]).unwrap();
    assert!(destructuring.trailing_comma_token.is_some());
    assert!(destructuring.class_context.is_some());
}

#[test]
fn test_parse_array_suffix() {
    let source = "declare const labels: string[];";
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let reference = arena.reference(file.statements[0]).unwrap();
    let named = arena.named_type(reference.ty).unwrap();
    assert!(named.open_bracket_token.is_some());
    assert!(named.close_bracket_token.is_some());
}

#[test]
fn test_parse_import_is_opaque() {
    let source = "import { Parser } from \"hot-formula-parser\";\ndeclare type A = B;";
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    assert_eq!(file.statements.len(), 2);
    assert_eq!(arena.kind(file.statements[0]), Some(NodeKind::ImportDeclaration));
}

#[test]
fn test_parse_qualified_type_name() {
    let source = "declare const parser: hotFormulaParser.Parser;";
    let (stream, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let reference = arena.reference(file.statements[0]).unwrap();
    let named = arena.named_type(reference.ty).unwrap();
    let name = arena.type_name(named.name).unwrap();
    assert_eq!(name.parts.len(), 2);
    let (first, last) = arena.token_range(named.name);
    assert_eq!(stream.plain_text(first, last), "hotFormulaParser.Parser");
}

#[test]
fn test_generic_parameter_with_bound_and_default() {
    let source = "declare type Props<CellType extends CellBase = CellBase> = { data: CellType };";
    let (_, arena, root) = parse(source);
    let file = arena.source_file(root).unwrap();
    let alias = arena.type_alias(file.statements[0]).unwrap();
    let generic = arena.generic(alias.generic.unwrap()).unwrap();
    let param = arena.generic_parameter(generic.params[0]).unwrap();
    assert!(param.extends_token.is_some());
    assert!(param.bound.is_some());
    assert!(param.equals_token.is_some());
    assert!(param.default_ty.is_some());
}

#[test]
fn test_parse_fails_fast_on_malformed_declaration() {
    let diagnostic = parse_err("declare enum Broken {}");
    assert!(
        diagnostic.message_text.contains("expected 'type'"),
        "unexpected message: {}",
        diagnostic.message_text
    );
}

#[test]
fn test_parse_fails_fast_on_missing_equals() {
    let diagnostic = parse_err("declare type A { x: number };");
    assert!(
        diagnostic.message_text.contains("expected '='"),
        "unexpected message: {}",
        diagnostic.message_text
    );
}
