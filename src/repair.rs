//! Fence repair: close a dangling code fence in one file.
//!
//! Uses the same parity heuristic as the `unclosed-fence` check. When the
//! marker count is odd the whole file is rewritten with a closing fence
//! appended; an even count leaves the file byte-for-byte untouched, which
//! makes the repair idempotent.

use crate::checks::{count_fences, FENCE};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Serialize)]
/// Outcome of one repair invocation.
pub struct RepairOutcome {
    pub file: String,
    pub fence_count: usize,
    pub appended: bool,
}

/// Repair the file at `path`. I/O failure is fatal to the invocation; no
/// partial repair is attempted.
pub fn run_repair(path: &Path) -> io::Result<RepairOutcome> {
    let text = fs::read_to_string(path)?;
    let fence_count = count_fences(&text);
    let appended = fence_count % 2 != 0;
    if appended {
        let mut repaired = text;
        repaired.push('\n');
        repaired.push_str(FENCE);
        repaired.push('\n');
        fs::write(path, repaired)?;
    }
    Ok(RepairOutcome {
        file: path.to_string_lossy().to_string(),
        fence_count,
        appended,
    })
}
