//! Validation driver: file discovery, per-file checks, and aggregation.
//!
//! Discovery globs `<docs_dir>/**/*.md` under the repo root and sorts the
//! matches so report ordering is reproducible. Per-file validation runs on
//! the rayon pool; results are collected and sorted before any printing, so
//! output stays deterministic.

use crate::checks::validate_text;
use crate::models::{FileReport, Finding, Severity, Summary, ValidateResult};
use glob::glob;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Validate every Markdown file under `docs_dir` within `repo_root`.
///
/// A file that cannot be read as UTF-8 text yields a single file-level
/// `read-file` error and the run continues; it counts in the error bucket.
pub fn run_validate(repo_root: &Path, docs_dir: &str) -> ValidateResult {
    let pattern = repo_root
        .join(docs_dir)
        .join("**/*.md")
        .to_string_lossy()
        .to_string();
    let mut targets: Vec<PathBuf> = glob(&pattern)
        .expect("bad glob pattern")
        .flatten()
        .filter(|p| p.is_file())
        .collect();
    targets.sort();

    let mut reports: Vec<FileReport> = targets
        .par_iter()
        .map(|path| {
            let findings = match fs::read_to_string(path) {
                Ok(text) => validate_text(&text),
                Err(e) => vec![Finding {
                    check: "read-file".into(),
                    severity: Severity::Error,
                    line: None,
                    message: format!("Could not read file: {}", e),
                }],
            };
            FileReport::new(display_path(repo_root, path), findings)
        })
        .collect();
    reports.sort_by(|a, b| a.file.cmp(&b.file));

    let summary = Summary::from_reports(&reports);
    ValidateResult { reports, summary }
}

/// Report paths relative to the repo root when possible.
fn display_path(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Exit status for automation: `1` iff any file has errors, `0` otherwise
/// (warnings alone never fail the run).
pub fn exit_code(result: &ValidateResult) -> i32 {
    if result.summary.errors > 0 {
        1
    } else {
        0
    }
}
