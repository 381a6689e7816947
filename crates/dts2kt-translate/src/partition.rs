//! Output partitioning: primary/support artifacts and blank-line cleanup.

use crate::module_name::normalize_module_name;
use crate::TranslationResult;

/// Remove every run of two or more consecutive whitespace-only lines.
/// Deletions leave such runs behind in the rewritten primary stream.
/// Single blank lines survive, which makes the pass idempotent.
pub(crate) fn normalize_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_blanks: Vec<&str> = Vec::new();
    for line in text.split_inclusive('\n') {
        if line.trim().is_empty() {
            pending_blanks.push(line);
            continue;
        }
        if pending_blanks.len() == 1 {
            out.push_str(pending_blanks[0]);
        }
        pending_blanks.clear();
        out.push_str(line);
    }
    if pending_blanks.len() == 1 {
        out.push_str(pending_blanks[0]);
    }
    out
}

/// Assemble the final artifacts: the normalized primary stream, plus the
/// support buffer when anything was relocated into it.
pub(crate) fn build_results(
    primary: String,
    support: String,
    module_name: &str,
) -> Vec<TranslationResult> {
    let stem = format!("{}External", normalize_module_name(module_name));
    let mut results = vec![TranslationResult {
        code: normalize_blank_lines(&primary),
        file_name: format!("{stem}.kt"),
    }];
    if !support.trim().is_empty() {
        results.push(TranslationResult {
            code: support,
            file_name: format!("{stem}Support.kt"),
        });
    }
    results
}
