//! Output rendering for check and fix commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file findings and a top-level summary. Composition of the JSON value
//! is pure so tests can assert on shape without capturing stdout.

use crate::models::{FileStatus, Severity, ValidateResult};
use crate::repair::RepairOutcome;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print validation results in the requested format.
pub fn print_validate(res: &ValidateResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_validate_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for report in &res.reports {
                let file = if color {
                    report.file.clone().bold().to_string()
                } else {
                    report.file.clone()
                };
                println!("📄 {}", file);
                for f in &report.findings {
                    let (icon, sev) = match f.severity {
                        Severity::Error => {
                            if color {
                                ("✖".red().to_string(), "⟦error⟧".red().bold().to_string())
                            } else {
                                ("✖".to_string(), "⟦error⟧".to_string())
                            }
                        }
                        Severity::Warning => {
                            if color {
                                ("▲".yellow().to_string(), "⟦warn⟧".yellow().bold().to_string())
                            } else {
                                ("▲".to_string(), "⟦warn⟧".to_string())
                            }
                        }
                    };
                    println!("  {} {} ❲{}❳ — {}", icon, sev, f.check, f.message);
                }
                let status = match report.status {
                    FileStatus::Error => {
                        if color {
                            "✖ file has ERRORS".red().bold().to_string()
                        } else {
                            "✖ file has ERRORS".to_string()
                        }
                    }
                    FileStatus::Warning => {
                        if color {
                            "▲ file has WARNINGS".yellow().bold().to_string()
                        } else {
                            "▲ file has WARNINGS".to_string()
                        }
                    }
                    FileStatus::Valid => {
                        if color {
                            "✔ file is VALID".green().to_string()
                        } else {
                            "✔ file is VALID".to_string()
                        }
                    }
                };
                println!("  {}", status);
            }
            let summary = format!(
                "— Summary — files={} errors={} warnings={} valid={}",
                res.summary.files, res.summary.errors, res.summary.warnings, res.summary.valid
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
            let closing = if res.summary.errors > 0 {
                "✖ Documentation has errors that need fixing"
            } else if res.summary.warnings > 0 {
                "▲ Documentation has warnings but no errors"
            } else {
                "🎉 All documentation files are valid!"
            };
            println!("{}", closing);
        }
    }
}

/// Print the repair outcome: marker count found and whether a closing
/// fence was appended.
pub fn print_repair(out: &RepairOutcome, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::to_value(out).unwrap()).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            println!("📄 {} — {} fence markers found", out.file, out.fence_count);
            if out.appended {
                if color {
                    println!("{}", "✏️  appended closing fence".green().bold());
                } else {
                    println!("✏️  appended closing fence");
                }
            } else {
                println!("no changes: fence count is even");
            }
        }
    }
}

/// Compose validation JSON object (pure) for testing/snapshot purposes.
pub fn compose_validate_json(res: &ValidateResult) -> JsonVal {
    // Directly serialize ValidateResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileReport, Finding, Summary};

    #[test]
    fn test_compose_validate_json_shape() {
        let reports = vec![FileReport::new(
            "docs/a.md".into(),
            vec![Finding {
                check: "empty-header".into(),
                severity: Severity::Error,
                line: Some(3),
                message: "Empty header found at line 3".into(),
            }],
        )];
        let summary = Summary::from_reports(&reports);
        let res = ValidateResult { reports, summary };
        let out = compose_validate_json(&res);
        assert_eq!(out["summary"]["errors"], 1);
        assert_eq!(out["summary"]["files"], 1);
        assert_eq!(out["reports"][0]["file"], "docs/a.md");
        assert_eq!(out["reports"][0]["status"], "error");
        assert_eq!(out["reports"][0]["findings"][0]["line"], 3);
        assert_eq!(out["reports"][0]["findings"][0]["severity"], "error");
    }

    #[test]
    fn test_repair_outcome_serializes() {
        let out = RepairOutcome {
            file: "docs/a.md".into(),
            fence_count: 3,
            appended: true,
        };
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["fence_count"], 3);
        assert_eq!(v["appended"], true);
    }
}
