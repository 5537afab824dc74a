use std::path::Path;
use std::process::Command;

use anyhow::Result;
use console::style;

use devtask_core::{run_with_env, runner};

use crate::config::Config;

/// Build distributions with `python -m build`. With no flags both the sdist
/// and the wheel are produced; passing exactly one flag narrows the output.
pub fn run(root: &Path, config: &Config, sdist: bool, wheel: bool) -> Result<()> {
    let venv = config.venv(root);
    run_with_env(&venv, || {
        let mut cmd = Command::new("python");
        cmd.args(["-m", "build"]);
        if sdist && !wheel {
            cmd.arg("--sdist");
        }
        if wheel && !sdist {
            cmd.arg("--wheel");
        }
        cmd.current_dir(root);
        runner::run(&mut cmd)
    })?;

    eprintln!("{} Distributions written to dist/", style("✓").green());
    Ok(())
}
