use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::CONFIG_FILE;

const ROOT_MARKERS: &[&str] = &[CONFIG_FILE, "pyproject.toml", "requirements.txt", ".git"];

/// Walk up from `cwd` to the nearest directory carrying a project marker.
/// Falls back to `cwd` itself when nothing is found.
pub fn discover(cwd: &Path) -> PathBuf {
    let mut dir = cwd.to_path_buf();
    loop {
        if ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists()) {
            debug!(root = %dir.display(), "discovered project root");
            return dir;
        }
        if !dir.pop() {
            return cwd.to_path_buf();
        }
    }
}
