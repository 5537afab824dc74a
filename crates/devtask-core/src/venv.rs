use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

#[cfg(windows)]
const PYTHON_EXE: &str = "python.exe";
#[cfg(not(windows))]
const PYTHON_EXE: &str = "python";

/// A Python virtual environment identified by its root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venv {
    root: PathBuf,
}

impl Venv {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A directory counts as a venv when the marker file written by
    /// `python -m venv` is present.
    pub fn exists(&self) -> bool {
        self.root.join("pyvenv.cfg").is_file()
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    pub fn python(&self) -> PathBuf {
        self.bin_dir().join(PYTHON_EXE)
    }

    /// Precondition check for activation: the environment must already have
    /// been created, and must still have its executable directory.
    pub fn ensure_usable(&self) -> Result<()> {
        if !self.exists() {
            return Err(Error::EnvNotFound(self.root.clone()));
        }
        if !self.bin_dir().is_dir() {
            return Err(Error::EnvCorrupt {
                path: self.root.clone(),
                reason: format!("missing {BIN_DIR} directory"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_venv(dir: &Path) -> Venv {
        let venv = Venv::at(dir.join(".venv"));
        fs::create_dir_all(venv.bin_dir()).unwrap();
        fs::write(venv.root().join("pyvenv.cfg"), "home = /usr/bin\n").unwrap();
        venv
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = TempDir::new().unwrap();
        let venv = Venv::at(dir.path().join(".venv"));
        assert!(!venv.exists());
        assert!(matches!(venv.ensure_usable(), Err(Error::EnvNotFound(_))));
    }

    #[test]
    fn directory_without_marker_is_not_found() {
        let dir = TempDir::new().unwrap();
        let venv = Venv::at(dir.path().join(".venv"));
        fs::create_dir_all(venv.bin_dir()).unwrap();
        assert!(matches!(venv.ensure_usable(), Err(Error::EnvNotFound(_))));
    }

    #[test]
    fn marker_without_bin_dir_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let venv = Venv::at(dir.path().join(".venv"));
        fs::create_dir_all(venv.root()).unwrap();
        fs::write(venv.root().join("pyvenv.cfg"), "").unwrap();
        assert!(matches!(venv.ensure_usable(), Err(Error::EnvCorrupt { .. })));
    }

    #[test]
    fn complete_venv_is_usable() {
        let dir = TempDir::new().unwrap();
        let venv = create_venv(dir.path());
        assert!(venv.exists());
        venv.ensure_usable().unwrap();
        assert!(venv.python().starts_with(venv.bin_dir()));
    }
}
