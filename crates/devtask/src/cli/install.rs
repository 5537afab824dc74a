use std::path::Path;
use std::process::Command;

use anyhow::{bail, Result};
use console::style;

use devtask_core::{run_with_env, runner};

use crate::config::Config;

pub fn run(root: &Path, config: &Config, dev: bool) -> Result<()> {
    let manifest = root.join(if dev {
        &config.dev_requirements
    } else {
        &config.requirements
    });
    if !manifest.exists() {
        bail!("requirements manifest {} does not exist", manifest.display());
    }

    let venv = config.venv(root);
    eprintln!(
        "{} Installing from {}",
        style("→").cyan(),
        manifest.display()
    );
    run_with_env(&venv, || {
        let mut cmd = Command::new("python");
        cmd.args(["-m", "pip", "install", "-r"])
            .arg(&manifest)
            .current_dir(root);
        runner::run(&mut cmd)
    })?;

    eprintln!("{} Dependencies installed", style("✓").green());
    Ok(())
}
