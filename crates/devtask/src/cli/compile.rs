use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context as _, Result};
use console::style;

use devtask_core::{run_with_env, runner};

use crate::config::Config;

pub fn run(root: &Path, config: &Config, entry: Option<&str>, onefile: bool) -> Result<()> {
    let entry = entry
        .or(config.entry_script.as_deref())
        .context("no entry script given (pass one, or set entry_script in devtask.json)")?;
    let entry_path = root.join(entry);
    if !entry_path.exists() {
        bail!("entry script {} does not exist", entry_path.display());
    }

    let venv = config.venv(root);
    eprintln!(
        "{} Packaging {}",
        style("→").cyan(),
        entry_path.display()
    );
    run_with_env(&venv, || {
        let mut cmd = Command::new("python");
        cmd.args(["-m", "PyInstaller", "--noconfirm"]);
        if onefile {
            cmd.arg("--onefile");
        }
        cmd.arg(&entry_path).current_dir(root);
        runner::run(&mut cmd)
    })?;

    eprintln!("{} Executable written to dist/", style("✓").green());
    Ok(())
}
