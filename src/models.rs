//! Shared data models for check findings, per-file reports, and run summaries.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Severity of a single finding.
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
/// A single detected issue in one document.
pub struct Finding {
    pub check: String,
    pub severity: Severity,
    /// 1-based line number for line-addressable checks; `None` for
    /// file-level findings.
    pub line: Option<usize>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Mutually exclusive per-file classification used for run aggregation.
pub enum FileStatus {
    Error,
    Warning,
    Valid,
}

#[derive(Debug, Serialize)]
/// All findings for one document plus its path as displayed.
pub struct FileReport {
    pub file: String,
    pub findings: Vec<Finding>,
    pub status: FileStatus,
}

impl FileReport {
    /// Classify findings with error > warning > valid priority.
    pub fn new(file: String, findings: Vec<Finding>) -> Self {
        let has_errors = findings.iter().any(|f| f.severity == Severity::Error);
        let has_warnings = findings.iter().any(|f| f.severity == Severity::Warning);
        let status = if has_errors {
            FileStatus::Error
        } else if has_warnings {
            FileStatus::Warning
        } else {
            FileStatus::Valid
        };
        FileReport {
            file,
            findings,
            status,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.status == FileStatus::Error
    }

    /// Warning bucket membership: only files otherwise clean of errors.
    pub fn has_warnings(&self) -> bool {
        self.status == FileStatus::Warning
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
/// Aggregated counts over one run; errors + warnings + valid == files.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub valid: usize,
    pub files: usize,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut s = Summary::default();
        for r in reports {
            match r.status {
                FileStatus::Error => s.errors += 1,
                FileStatus::Warning => s.warnings += 1,
                FileStatus::Valid => s.valid += 1,
            }
            s.files += 1;
        }
        s
    }
}

#[derive(Debug, Serialize)]
/// Validation results container.
pub struct ValidateResult {
    pub reports: Vec<FileReport>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity) -> Finding {
        Finding {
            check: "t".into(),
            severity,
            line: None,
            message: "m".into(),
        }
    }

    #[test]
    fn test_status_priority_error_over_warning() {
        let r = FileReport::new(
            "a.md".into(),
            vec![finding(Severity::Warning), finding(Severity::Error)],
        );
        assert_eq!(r.status, FileStatus::Error);
        assert!(r.has_errors());
        // warnings present but never surfaced at bucket level
        assert!(!r.has_warnings());
    }

    #[test]
    fn test_status_warning_only_and_valid() {
        let w = FileReport::new("a.md".into(), vec![finding(Severity::Warning)]);
        assert_eq!(w.status, FileStatus::Warning);
        let v = FileReport::new("a.md".into(), vec![]);
        assert_eq!(v.status, FileStatus::Valid);
    }

    #[test]
    fn test_summary_buckets_sum_to_files() {
        let reports = vec![
            FileReport::new("a.md".into(), vec![finding(Severity::Error)]),
            FileReport::new("b.md".into(), vec![finding(Severity::Warning)]),
            FileReport::new("c.md".into(), vec![]),
        ];
        let s = Summary::from_reports(&reports);
        assert_eq!(s.errors + s.warnings + s.valid, s.files);
        assert_eq!(s.files, 3);
        assert_eq!((s.errors, s.warnings, s.valid), (1, 1, 1));
    }

    #[test]
    fn test_summary_empty_run_is_all_zero() {
        let s = Summary::from_reports(&[]);
        assert_eq!(s, Summary::default());
    }
}
