//! Configuration discovery and effective settings resolution.
//!
//! Mdcheck reads `mdcheck.toml|yaml|yml` from the repository root (or the
//! closest ancestor of the current directory when no root is given) and
//! merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `docs_dir`: `docs`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `mdcheck.toml|yaml|yml`.
pub struct MdcheckConfig {
    pub docs_dir: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub docs_dir: String,
    pub output: String,
}

const CONFIG_NAMES: [&str; 3] = ["mdcheck.toml", "mdcheck.yaml", "mdcheck.yml"];

/// Load a config file from `root` if one exists. TOML takes precedence over
/// the YAML spellings when several are present.
pub fn load_config(root: &Path) -> Option<MdcheckConfig> {
    for name in CONFIG_NAMES {
        let p = root.join(name);
        let Ok(s) = fs::read_to_string(&p) else {
            continue;
        };
        let parsed = if name.ends_with(".toml") {
            toml::from_str::<MdcheckConfig>(&s).ok()
        } else {
            serde_yaml::from_str::<MdcheckConfig>(&s).ok()
        };
        if parsed.is_some() {
            return parsed;
        }
    }
    None
}

/// Walk up from `start` looking for a directory containing a config file.
fn find_config_root(start: &Path) -> Option<PathBuf> {
    let mut cur = Some(start);
    while let Some(dir) = cur {
        if CONFIG_NAMES.iter().any(|n| dir.join(n).is_file()) {
            return Some(dir.to_path_buf());
        }
        cur = dir.parent();
    }
    None
}

/// Resolve the effective configuration from CLI overrides, the config file,
/// and built-in defaults, in that precedence order.
pub fn resolve_effective(
    repo_root: Option<&str>,
    docs_dir: Option<&str>,
    output: Option<&str>,
) -> Effective {
    let repo_root = match repo_root {
        Some(r) => PathBuf::from(r),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            find_config_root(&cwd).unwrap_or(cwd)
        }
    };
    let cfg = load_config(&repo_root).unwrap_or_default();
    let docs_dir = docs_dir
        .map(str::to_string)
        .or(cfg.docs_dir)
        .unwrap_or_else(|| "docs".to_string());
    let output = output
        .map(str::to_string)
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    Effective {
        repo_root,
        docs_dir,
        output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("mdcheck.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
docs_dir = "documentation"
output = "json"
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None);
        assert_eq!(eff.docs_dir, "documentation");
        assert_eq!(eff.output, "json");
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("mdcheck.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
docs_dir: manual
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None);
        assert_eq!(eff.docs_dir, "manual");
        // output defaults to human when unspecified
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("mdcheck.toml")).unwrap();
        writeln!(f, "{}", r#"docs_dir = "documentation""#).unwrap();

        let eff = resolve_effective(root.to_str(), Some("guides"), Some("json"));
        assert_eq!(eff.docs_dir, "guides");
        assert_eq!(eff.output, "json");
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None);
        assert_eq!(eff.docs_dir, "docs");
        assert_eq!(eff.output, "human");
        assert!(load_config(dir.path()).is_none());
    }
}
