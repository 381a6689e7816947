//! End-to-end translation tests: one declaration module in, Kotlin out.

use dts2kt_translate::{translate, TranslateError, Translator};

#[test]
fn test_minimal_module_yields_single_primary_artifact() {
    let source = r#"declare type Point = {
    /** The cell's row */
    row: number;
    column: number;
};
declare function createEmpty<T>(rows: number, columns: number): Matrix<T> | null;
"#;
    let results = translate(source, "sample-lib").expect("translation should succeed");
    assert_eq!(results.len(), 1, "no support content expected");
    assert_eq!(results[0].file_name, "sampleLibExternal.kt");
    let expected = "@file:JsModule(\"sample-lib\")\n\
@file:Suppress(\"unused\", \"PropertyName\", \"FunctionName\")\n\
\n\
external interface Point  {\n    /** The cell's row */\n    var row: Number\n    var column: Number\n}\n\
external fun <T> createEmpty(rows: Number, columns: Number): Matrix<T>?\n";
    assert_eq!(results[0].code, expected);
}

#[test]
fn test_restricted_values_become_enum_in_support() {
    let source = r#"declare type Point = { x: number };
/** The spreadsheet's write mode */
declare type Mode = "view" | "edit";
"#;
    let results = translate(source, "enum-lib").expect("translation should succeed");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].file_name, "enumLibExternal.kt");
    assert_eq!(results[1].file_name, "enumLibExternalSupport.kt");

    // In-place occurrence must be gone from the primary artifact.
    assert!(!results[0].code.contains("Mode"), "primary: {}", results[0].code);
    assert!(!results[0].code.contains("enum"), "primary: {}", results[0].code);

    let expected_support = "/** The spreadsheet's write mode */\n\
@Suppress(\"NAME_CONTAINS_ILLEGAL_CHARS\")\n\
// language=JavaScript\n\
@JsName(\"\"\"(/*union*/{view: 'view',edit: 'edit'}/*union*/)\"\"\")\n\
enum class Mode { view , edit}\n";
    assert_eq!(results[1].code, expected_support);

    let expected_primary = "@file:JsModule(\"enum-lib\")\n\
@file:Suppress(\"unused\", \"PropertyName\", \"FunctionName\")\n\
\n\
external interface Point  { var x: Number }\n";
    assert_eq!(results[0].code, expected_primary);
}

#[test]
fn test_wide_union_alias_is_widened_with_doc_comment() {
    let source = "declare type FormulaParseResult = string | boolean | number;\n";
    let results = translate(source, "formula").expect("translation should succeed");
    assert_eq!(results.len(), 2);
    let support = &results[1].code;
    assert!(
        support.contains("/** Any = String | Boolean | Number */"),
        "support: {support}"
    );
    assert!(
        support.contains("typealias FormulaParseResult = Any"),
        "support: {support}"
    );
    assert!(!results[0].code.contains("FormulaParseResult"));
}

#[test]
fn test_nullable_pair_alias_collapses_without_widening_note() {
    let source = "declare type MaybeName = string | null;\n";
    let results = translate(source, "maybe").expect("translation should succeed");
    assert_eq!(results.len(), 2);
    let support = &results[1].code;
    assert!(
        support.contains("typealias MaybeName = String?"),
        "support: {support}"
    );
    assert!(!support.contains("/** Any"), "no widening note expected: {support}");
}

#[test]
fn test_function_union_return_is_widened_with_comment() {
    let source = "declare function getComputedValue<T>(cell: T): Value | FormulaError | null;\n";
    let results = translate(source, "calc").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(
        primary.contains("/** Any = Value | FormulaError | null */"),
        "primary: {primary}"
    );
    assert!(primary.contains(": Any?"), "primary: {primary}");
    assert!(primary.contains("external fun <T> getComputedValue"), "primary: {primary}");
}

#[test]
fn test_reference_becomes_external_val_or_fun() {
    let source = "declare const DataEditor: Editor;\n\
declare const getValue: <T>(cell: T | null, parser: Parser) => number;\n";
    let results = translate(source, "refs").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(primary.contains("external val DataEditor: Editor"), "primary: {primary}");
    assert!(primary.contains("external fun <T> getValue"), "primary: {primary}");
    assert!(primary.contains("(cell: T?, parser: Parser) : Number"), "primary: {primary}");
    assert!(!primary.contains("=>"), "arrow must be rewritten: {primary}");
}

#[test]
fn test_member_rules_variables_arrays_keywords_lambdas() {
    let source = "declare type Props = {\n\
    data?: CellType;\n\
    columnLabels?: string[];\n\
    onChange: (data: Matrix<T>) => void;\n\
};\n";
    let results = translate(source, "props").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(primary.contains("var `data`: CellType?"), "primary: {primary}");
    assert!(primary.contains("var columnLabels: Array<String>?"), "primary: {primary}");
    assert!(primary.contains("var onChange: (`data`: Matrix<T>) -> Unit"), "primary: {primary}");
}

#[test]
fn test_bare_tracked_generic_gets_wildcard() {
    let source = "declare type CellBase<Value> = { value: Value };\n\
declare type CellChange<Cell extends CellBase = CellBase> = {\n\
    prev: CellBase<Cell>;\n\
};\n";
    let results = translate(source, "cells").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(
        primary.contains("external interface CellChange<Cell : CellBase<*> >"),
        "primary: {primary}"
    );
    assert!(primary.contains("var prev: CellBase<Cell>"), "primary: {primary}");
    assert!(!primary.contains("extends"), "primary: {primary}");
}

#[test]
fn test_intersection_alias_becomes_interface_with_supertypes() {
    let source = "declare type Point = { x: number };\n\
declare type CellDescriptor<Cell> = Point & { cell?: Cell };\n";
    let results = translate(source, "desc").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(
        primary.contains("external interface CellDescriptor<Cell> :Point"),
        "primary: {primary}"
    );
    assert!(primary.contains("var cell: Cell?"), "primary: {primary}");
    assert!(!primary.contains('&'), "primary: {primary}");
}

#[test]
fn test_generic_wrapping_class_is_inlined_as_supertype() {
    let source = "declare type TableProps = PropsWithChildren<{\n    columns: number;\n}>;\n";
    let results = translate(source, "table").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(
        primary.contains("external interface TableProps : PropsWithChildren{"),
        "primary: {primary}"
    );
    assert!(primary.contains("var columns: Number"), "primary: {primary}");
}

#[test]
fn test_import_and_export_are_deleted() {
    let source = "import { Parser } from \"hot-formula-parser\";\n\
export declare const version: string;\n";
    let results = translate(source, "versioned").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(!primary.contains("import"), "primary: {primary}");
    assert!(!primary.contains("export"), "primary: {primary}");
    assert!(primary.contains("external val version: String"), "primary: {primary}");
    assert!(
        primary.starts_with("@file:JsModule(\"versioned\")\n"),
        "module binding header must lead the file: {primary}"
    );
}

#[test]
fn test_destructuring_resolves_through_extends_chain() {
    let source = "declare type Base = { x: string };\n\
declare type Mid = Base & { y: number };\n\
declare type Props = Mid & { z: boolean };\n\
declare function f({ x, z }: Props): void;\n";
    let results = translate(source, "chain").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(primary.contains("x:String"), "primary: {primary}");
    assert!(primary.contains("z:Boolean"), "primary: {primary}");
    assert!(!primary.contains("{ x, z }"), "primary: {primary}");
    assert!(!primary.contains("Props)"), "declared type must be dropped: {primary}");
}

#[test]
fn test_destructuring_inline_shape_matches_by_field_name() {
    let source = "declare function f({ b, a }: { a: string; b: number }): void;\n";
    let results = translate(source, "inline").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(primary.contains("b:Number"), "primary: {primary}");
    assert!(primary.contains("a:String"), "primary: {primary}");
}

#[test]
fn test_duplicate_alias_names_last_write_wins() {
    let source = "declare type Dup = { a: string };\n\
declare type Dup = { a: number };\n\
declare function g({ a }: Dup): void;\n";
    let results = translate(source, "dup").expect("translation should succeed");
    let primary = &results[0].code;
    assert!(primary.contains("a:Number"), "primary: {primary}");
}

#[test]
fn test_cyclic_alias_chain_terminates_unannotated() {
    let source = "declare type A = B & { };\n\
declare type B = A & { };\n\
declare function h({ q }: A): void;\n";
    let results = translate(source, "cyclic").expect("translation must terminate");
    let primary = &results[0].code;
    assert!(primary.contains("external fun h"), "primary: {primary}");
    assert!(primary.contains(" q "), "unresolved name stays unannotated: {primary}");
}

#[test]
fn test_parse_failure_aborts_with_no_artifacts() {
    let error = translate("declare enum Nope {}", "broken").expect_err("must fail fast");
    match error {
        TranslateError::Parse(diagnostic) => {
            assert!(diagnostic.message_text.contains("expected 'type'"));
        }
    }
}

#[test]
fn test_lexical_failure_aborts_with_no_artifacts() {
    let error = translate("declare type A = \"unterminated", "broken").expect_err("must fail fast");
    match error {
        TranslateError::Parse(diagnostic) => {
            assert!(diagnostic.message_text.contains("unterminated"));
        }
    }
}

#[test]
fn test_translator_is_reusable_across_modules() {
    let translator = Translator::new();
    let first = translator
        .translate("declare const a: string;\n", "first-lib")
        .expect("first translation");
    let second = translator
        .translate("declare const b: number;\n", "second-lib")
        .expect("second translation");
    assert_eq!(first[0].file_name, "firstLibExternal.kt");
    assert_eq!(second[0].file_name, "secondLibExternal.kt");
    assert!(first[0].code.contains("external val a: String"));
    assert!(second[0].code.contains("external val b: Number"));
}
