//! Pure document checks.
//!
//! Every check is a deterministic function of the input text and returns
//! findings without touching the filesystem or stdout. Checks never
//! short-circuit each other: `validate_text` always runs the full battery.

use crate::models::{Finding, Severity};
use regex::Regex;
use std::sync::OnceLock;

/// Triple-backtick fence delimiter.
pub const FENCE: &str = "```";
/// Literal metadata labels expected somewhere in the document.
pub const AUTHOR_LABEL: &str = "**Author:**";
pub const VERSION_LABEL: &str = "**Version:**";

/// Matches 1–6 leading `#` followed only by optional whitespace.
///
/// Seven or more hashes deliberately do not match; that boundary is fixed
/// behavior, not a bug to correct.
fn empty_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#{1,6}\s*$").expect("bad header pattern"))
}

/// Count fence markers in the raw text. Non-overlapping substring count,
/// not line-based: two markers on one line count as two.
pub fn count_fences(text: &str) -> usize {
    text.matches(FENCE).count()
}

/// Flag every line that is a header with no text after the hashes.
pub fn check_empty_headers(text: &str) -> Vec<Finding> {
    let mut out = Vec::new();
    for (i, line) in text.split('\n').enumerate() {
        if empty_header_re().is_match(line) {
            out.push(Finding {
                check: "empty-header".into(),
                severity: Severity::Error,
                line: Some(i + 1),
                message: format!("Empty header found at line {}", i + 1),
            });
        }
    }
    out
}

/// Flag an odd fence-marker count. A substring-parity heuristic, not a
/// fence parse: markers inside inline text count too.
pub fn check_unclosed_fence(text: &str) -> Option<Finding> {
    let count = count_fences(text);
    if count % 2 != 0 {
        Some(Finding {
            check: "unclosed-fence".into(),
            severity: Severity::Error,
            line: None,
            message: format!("Odd number of code fence markers ({})", count),
        })
    } else {
        None
    }
}

/// Flag each missing metadata label independently.
pub fn check_metadata(text: &str) -> Vec<Finding> {
    let mut out = Vec::new();
    if !text.contains(AUTHOR_LABEL) {
        out.push(Finding {
            check: "missing-author".into(),
            severity: Severity::Warning,
            line: None,
            message: "No author information found".into(),
        });
    }
    if !text.contains(VERSION_LABEL) {
        out.push(Finding {
            check: "missing-version".into(),
            severity: Severity::Warning,
            line: None,
            message: "No version information found".into(),
        });
    }
    out
}

/// Run the full check battery in fixed order: headers, fences, metadata.
pub fn validate_text(text: &str) -> Vec<Finding> {
    let mut findings = check_empty_headers(text);
    findings.extend(check_unclosed_fence(text));
    findings.extend(check_metadata(text));
    findings
}
