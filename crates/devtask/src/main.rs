use std::env;
use std::path::Path;
use std::process;

use anyhow::Result;
use clap::Parser;
use console::style;

use devtask::cli::{Cli, Commands};
use devtask::config::Config;
use devtask::project;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", style("error:").red().bold());
        process::exit(exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = env::current_dir()?;
    let root = project::discover(&cwd);
    let config = Config::load(&root)?;
    dispatch(cli.command, &root, &config)
}

fn dispatch(command: Commands, root: &Path, config: &Config) -> Result<()> {
    match command {
        Commands::Env { upgrade } => devtask::cli::env::run(root, config, upgrade),
        Commands::Install { dev } => devtask::cli::install::run(root, config, dev),
        Commands::Lint => devtask::cli::lint::run(root, config),
        Commands::Test { args } => devtask::cli::test::run(root, config, &args),
        Commands::Report { format } => devtask::cli::report::run(root, config, format),
        Commands::Build { sdist, wheel } => devtask::cli::build::run(root, config, sdist, wheel),
        Commands::Compile { entry, onefile } => {
            devtask::cli::compile::run(root, config, entry.as_deref(), onefile)
        }
        Commands::Deps { package, json } => devtask::cli::deps::run(root, config, &package, json),
    }
}

/// Tool failures terminate with the wrapped tool's own status code.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<devtask_core::Error>()
        .map_or(1, devtask_core::Error::exit_code)
}
