use std::path::Path;
use std::process::Command;

use anyhow::Result;
use console::style;

use devtask_core::snapshot::DepSnapshot;
use devtask_core::{run_with_env, runner};

use crate::config::Config;

/// Infer what a package pulls in: snapshot the environment, install the
/// package, snapshot again, and report the difference.
pub fn run(root: &Path, config: &Config, package: &str, json: bool) -> Result<()> {
    let venv = config.venv(root);
    let diff = run_with_env(&venv, || {
        let before = freeze(root)?;
        let mut cmd = Command::new("python");
        cmd.args(["-m", "pip", "install", "--quiet", package])
            .current_dir(root);
        runner::run(&mut cmd)?;
        let after = freeze(root)?;
        Ok(before.diff(&after))
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
        return Ok(());
    }

    if diff.is_empty() {
        eprintln!("'{package}' pulled in nothing new");
        return Ok(());
    }
    if !diff.added.is_empty() {
        eprintln!("{} Installed with '{package}':", style("→").cyan());
        for (name, version) in &diff.added {
            println!("  {} {}", style(name).bold(), style(version).dim());
        }
    }
    if !diff.changed.is_empty() {
        eprintln!("{} Upgraded:", style("→").cyan());
        for (name, change) in &diff.changed {
            println!(
                "  {} {} -> {}",
                style(name).bold(),
                change.before,
                change.after
            );
        }
    }
    Ok(())
}

fn freeze(root: &Path) -> devtask_core::Result<DepSnapshot> {
    let mut cmd = Command::new("python");
    cmd.args(["-m", "pip", "freeze"]).current_dir(root);
    let output = runner::capture(&mut cmd)?;
    Ok(DepSnapshot::parse(&output))
}
