//! Translation driver: file reading, module-name defaulting, artifact output.

use crate::args::CliArgs;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Derive a module name from the input path: file stem with a trailing `.d`
/// (from `.d.ts`) stripped, e.g. `react-spreadsheet.d.ts` → `react-spreadsheet`.
pub fn default_module_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("module");
    stem.strip_suffix(".d").unwrap_or(stem).to_string()
}

/// Run one translation. Returns the paths written (empty in `--json` mode).
pub fn run(args: &CliArgs) -> Result<Vec<PathBuf>> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let module_name = match &args.module_name {
        Some(name) => name.clone(),
        None => default_module_name(&args.input),
    };
    tracing::info!(module = %module_name, input = %args.input.display(), "translating");

    let results = dts2kt_translate::translate(&source, &module_name)
        .with_context(|| format!("failed to translate {}", args.input.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(Vec::new());
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;
    let mut written = Vec::new();
    for result in &results {
        let path = args.out_dir.join(&result.file_name);
        fs::write(&path, &result.code)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
