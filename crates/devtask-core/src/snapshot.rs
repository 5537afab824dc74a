//! Installed-package snapshots and before/after diffs, built from
//! `pip freeze` output.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// PEP 503: runs of `-`, `_` and `.` are equivalent; names compare
/// case-insensitively.
fn canonical_name(raw: &str) -> String {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let re = SEPARATORS.get_or_init(|| Regex::new(r"[-_.]+").unwrap());
    re.replace_all(raw, "-").to_lowercase()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepSnapshot {
    pub taken_at: DateTime<Utc>,
    pub packages: BTreeMap<String, String>,
}

impl DepSnapshot {
    /// Parse `pip freeze` output. Comments, blank lines and editable
    /// installs are skipped; `name==version` and `name @ url` pins are kept.
    pub fn parse(freeze_output: &str) -> Self {
        let mut packages = BTreeMap::new();
        for line in freeze_output.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with("-e ") {
                continue;
            }
            if let Some((name, version)) = line.split_once("==") {
                packages.insert(canonical_name(name.trim()), version.trim().to_string());
            } else if let Some((name, url)) = line.split_once(" @ ") {
                packages.insert(canonical_name(name.trim()), url.trim().to_string());
            }
        }
        Self {
            taken_at: Utc::now(),
            packages,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(&canonical_name(name))
    }

    pub fn diff(&self, after: &Self) -> DepDiff {
        let mut diff = DepDiff::default();
        for (name, version) in &after.packages {
            match self.packages.get(name) {
                None => {
                    diff.added.insert(name.clone(), version.clone());
                }
                Some(before) if before != version => {
                    diff.changed.insert(
                        name.clone(),
                        VersionChange {
                            before: before.clone(),
                            after: version.clone(),
                        },
                    );
                }
                Some(_) => {}
            }
        }
        for (name, version) in &self.packages {
            if !after.packages.contains_key(name) {
                diff.removed.insert(name.clone(), version.clone());
            }
        }
        diff
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionChange {
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DepDiff {
    pub added: BTreeMap<String, String>,
    pub removed: BTreeMap<String, String>,
    pub changed: BTreeMap<String, VersionChange>,
}

impl DepDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
