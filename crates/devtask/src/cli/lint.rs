use std::path::Path;
use std::process::Command;

use anyhow::Result;
use console::style;

use devtask_core::{run_with_env, runner};

use crate::config::Config;

/// Run the configured analyzers in order inside a single activation. The
/// first non-zero exit aborts the remaining tools and becomes our own
/// exit status.
pub fn run(root: &Path, config: &Config) -> Result<()> {
    if config.lint.is_empty() {
        eprintln!("No lint tools configured");
        return Ok(());
    }

    let venv = config.venv(root);
    run_with_env(&venv, || {
        for argv in &config.lint {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };
            eprintln!("{} {}", style("→").cyan(), argv.join(" "));
            let mut cmd = Command::new(program);
            cmd.args(args).current_dir(root);
            runner::run(&mut cmd)?;
        }
        Ok(())
    })?;

    eprintln!("{} All checks passed", style("✓").green());
    Ok(())
}
