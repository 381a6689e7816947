//! Driver integration tests: translate a file on disk end-to-end.

use dts2kt_cli::args::CliArgs;
use dts2kt_cli::driver;
use std::path::Path;

#[test]
fn test_writes_primary_and_support_artifacts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("sample-lib.d.ts");
    std::fs::write(
        &input,
        "declare type Point = { x: number };\ndeclare type Mode = \"view\" | \"edit\";\n",
    )
    .expect("write input");

    let args = CliArgs {
        input: input.clone(),
        module_name: None,
        out_dir: dir.path().join("out"),
        json: false,
    };
    let written = driver::run(&args).expect("driver should succeed");
    assert_eq!(written.len(), 2);
    assert!(written[0].ends_with("sampleLibExternal.kt"));
    assert!(written[1].ends_with("sampleLibExternalSupport.kt"));

    let primary = std::fs::read_to_string(&written[0]).expect("read primary");
    assert!(primary.starts_with("@file:JsModule(\"sample-lib\")\n"));
    let support = std::fs::read_to_string(&written[1]).expect("read support");
    assert!(support.contains("enum class Mode"));
}

#[test]
fn test_parse_failure_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("broken.d.ts");
    std::fs::write(&input, "declare enum Broken {}\n").expect("write input");

    let out_dir = dir.path().join("out");
    let args = CliArgs {
        input,
        module_name: None,
        out_dir: out_dir.clone(),
        json: false,
    };
    assert!(driver::run(&args).is_err(), "parse failure must abort");
    assert!(!out_dir.exists(), "no partial artifacts may be written");
}

#[test]
fn test_default_module_name_strips_declaration_suffix() {
    assert_eq!(
        driver::default_module_name(Path::new("react-spreadsheet.d.ts")),
        "react-spreadsheet"
    );
    assert_eq!(driver::default_module_name(Path::new("plain.ts")), "plain");
    assert_eq!(driver::default_module_name(Path::new("index.d.ts")), "index");
}
