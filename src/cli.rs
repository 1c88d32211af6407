//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mdcheck",
    version,
    about = "Markdown documentation checker",
    long_about = "Mdcheck — a tiny, fast CLI to validate Markdown documentation trees and repair unclosed code fences.\n\nConfiguration precedence: CLI > mdcheck.toml > defaults.",
    after_help = "Examples:\n  mdcheck check\n  mdcheck check --repo-root . --docs-dir docs --output json\n  mdcheck fix docs/guide.md",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for checking and repairing documentation.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current mdcheck version."
    )]
    Version,
    /// Validate Markdown files
    #[command(
        about = "Run validation checks",
        long_about = "Recursively validate every *.md file under the docs directory: empty headers, unclosed code fences, and missing Author/Version metadata. Exits 1 when any file has errors.",
        after_help = "Examples:\n  mdcheck check\n  mdcheck check --docs-dir manual --output json"
    )]
    Check {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Docs directory relative to the root (default: docs)")]
        docs_dir: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// Close a dangling code fence in one file
    #[command(
        about = "Repair an unclosed code fence",
        long_about = "Count triple-backtick fence markers in the given file; when the count is odd, append a closing fence and rewrite the file. Even counts leave the file untouched, so repeated runs are no-ops.",
        after_help = "Examples:\n  mdcheck fix docs/guide.md\n  mdcheck fix docs/guide.md --output json"
    )]
    Fix {
        #[arg(help = "Path to the Markdown file to repair")]
        file: String,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
