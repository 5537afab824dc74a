use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context as _, Result};
use console::style;

use devtask_core::runner;

use crate::config::Config;

/// Create or refresh the virtual environment. This is the one entry point
/// that runs outside the activation guard: the guard's precondition is an
/// environment that already exists.
pub fn run(root: &Path, config: &Config, upgrade: bool) -> Result<()> {
    let venv = config.venv(root);
    let python = base_interpreter()?;

    if venv.exists() {
        if !upgrade {
            eprintln!(
                "{} Environment already exists at {} (use --upgrade to refresh)",
                style("●").green(),
                venv.root().display()
            );
            return Ok(());
        }
        eprintln!(
            "{} Upgrading environment at {}",
            style("→").cyan(),
            venv.root().display()
        );
        let mut cmd = Command::new(&python);
        cmd.args(["-m", "venv", "--upgrade", "--upgrade-deps"])
            .arg(venv.root());
        runner::run(&mut cmd)?;
    } else {
        eprintln!(
            "{} Creating environment at {}",
            style("→").cyan(),
            venv.root().display()
        );
        let mut cmd = Command::new(&python);
        cmd.args(["-m", "venv"]).arg(venv.root());
        runner::run(&mut cmd)?;
    }

    eprintln!("{} Environment ready", style("✓").green());
    Ok(())
}

fn base_interpreter() -> Result<PathBuf> {
    which::which("python3")
        .or_else(|_| which::which("python"))
        .context("no python interpreter found on PATH")
}
