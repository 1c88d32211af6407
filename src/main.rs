//! Mdcheck CLI binary entry point.
//! Delegates to modules for check/fix and prints results.

mod checks;
mod cli;
mod config;
mod models;
mod output;
mod repair;
mod utils;
mod validate;

use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check {
            repo_root,
            docs_dir,
            output,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                docs_dir.as_deref(),
                output.as_deref(),
            );
            if !eff.repo_root.is_dir() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    format!(
                        "Repository root not found: {}",
                        eff.repo_root.to_string_lossy()
                    )
                );
                std::process::exit(2);
            }
            // Friendly note if no mdcheck config was found
            if eff.output != "json" && config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No mdcheck.toml found; using defaults."
                );
            }
            let result = validate::run_validate(&eff.repo_root, &eff.docs_dir);
            output::print_validate(&result, &eff.output);
            let code = validate::exit_code(&result);
            if code != 0 {
                std::process::exit(code);
            }
        }
        Commands::Fix { file, output } => {
            let output = output.unwrap_or_else(|| "human".to_string());
            match repair::run_repair(Path::new(&file)) {
                Ok(outcome) => output::print_repair(&outcome, &output),
                Err(e) => {
                    eprintln!(
                        "{} {}",
                        utils::error_prefix(),
                        format!("fix failed for {}: {}", file, e)
                    );
                    std::process::exit(2);
                }
            }
        }
    }
}
