use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Deserialize;

use devtask_core::Venv;

pub const CONFIG_FILE: &str = "devtask.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Virtualenv location, relative to the project root unless absolute.
    pub venv_dir: String,
    pub requirements: String,
    pub dev_requirements: String,
    pub source_dir: String,
    /// Default entry script for `compile`.
    pub entry_script: Option<String>,
    /// Static-analysis commands run by `lint`, in order.
    pub lint: Vec<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            venv_dir: ".venv".to_string(),
            requirements: "requirements.txt".to_string(),
            dev_requirements: "requirements-dev.txt".to_string(),
            source_dir: "src".to_string(),
            entry_script: None,
            lint: default_lint(),
        }
    }
}

fn default_lint() -> Vec<Vec<String>> {
    vec![
        vec!["flake8".to_string(), "src".to_string()],
        vec!["mypy".to_string(), "src".to_string()],
        vec!["pylint".to_string(), "src".to_string()],
    ]
}

impl Config {
    /// Read `devtask.json` from the project root, or fall back to defaults
    /// when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config =
            serde_json::from_str(&text).with_context(|| format!("invalid {}", path.display()))?;
        Ok(config)
    }

    pub fn venv(&self, root: &Path) -> Venv {
        Venv::at(resolve_dir(root, &self.venv_dir))
    }
}

fn resolve_dir(root: &Path, dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    let path = Path::new(dir);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_file_absent() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.venv_dir, ".venv");
        assert_eq!(config.requirements, "requirements.txt");
        assert_eq!(config.lint.len(), 3);
    }

    #[test]
    fn overrides_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{"venv_dir": "env", "lint": [["ruff", "check", "."]]}"#,
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.venv_dir, "env");
        assert_eq!(config.lint, vec![vec!["ruff", "check", "."]]);
        // untouched fields keep their defaults
        assert_eq!(config.requirements, "requirements.txt");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{"venvdir": "env"}"#).unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn venv_dir_resolution() {
        let root = Path::new("/work/project");
        assert_eq!(
            resolve_dir(root, ".venv"),
            Path::new("/work/project/.venv")
        );
        assert_eq!(resolve_dir(root, "/opt/venv"), Path::new("/opt/venv"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_dir(root, "~/venvs/p"), home.join("venvs/p"));
        }
    }
}
