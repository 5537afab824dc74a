use std::path::Path;
use std::process::Command;

use anyhow::Result;
use console::style;

use devtask_core::{run_with_env, runner};

use super::ReportFormat;
use crate::config::Config;

pub fn run(root: &Path, config: &Config, format: ReportFormat) -> Result<()> {
    let subcommand = match format {
        ReportFormat::Term => "report",
        ReportFormat::Html => "html",
        ReportFormat::Xml => "xml",
    };

    let venv = config.venv(root);
    run_with_env(&venv, || {
        let mut cmd = Command::new("python");
        cmd.args(["-m", "coverage", subcommand]).current_dir(root);
        runner::run(&mut cmd)
    })?;

    match format {
        ReportFormat::Html => {
            eprintln!("{} Report written to htmlcov/index.html", style("✓").green());
        }
        ReportFormat::Xml => {
            eprintln!("{} Report written to coverage.xml", style("✓").green());
        }
        ReportFormat::Term => {}
    }
    Ok(())
}
