pub mod build;
pub mod compile;
pub mod deps;
pub mod env;
pub mod install;
pub mod lint;
pub mod report;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "dvt",
    about = "Task runner for Python projects: venv, install, lint, test, build",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the virtual environment, or refresh an existing one
    Env {
        /// Upgrade the environment and its seed packages in place
        #[arg(long)]
        upgrade: bool,
    },
    /// Install dependencies from the requirements manifest
    Install {
        /// Use the development manifest instead
        #[arg(long)]
        dev: bool,
    },
    /// Run the configured static-analysis tools in order
    Lint,
    /// Run the test suite under coverage instrumentation
    Test {
        /// Extra arguments passed through to pytest
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Emit a coverage report
    Report {
        /// Report format
        #[arg(long, value_enum, default_value = "term")]
        format: ReportFormat,
    },
    /// Build source and wheel distributions
    Build {
        /// Build only the source distribution
        #[arg(long)]
        sdist: bool,
        /// Build only the wheel
        #[arg(long)]
        wheel: bool,
    },
    /// Package an entry script into a standalone executable
    Compile {
        /// Entry script (defaults to entry_script from devtask.json)
        entry: Option<String>,
        /// Produce a single-file executable
        #[arg(long)]
        onefile: bool,
    },
    /// Show the transitive dependencies a package would pull in
    Deps {
        /// Package to install and diff
        package: String,
        /// Print the diff as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Term,
    Html,
    Xml,
}
