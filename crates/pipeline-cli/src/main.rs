//! Pipeline CLI
//!
//! Resolves layered pipeline configuration and loads plugin sections.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Plugin failures are logged at error level, so warnings stay visible
    let directive = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = pipeline_plugins::logging::init_with_default(directive) {
        eprintln!("{} failed to initialise logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Pipeline configuration CLI", "pipeline".green().bold());
            println!();
            println!("Run {} for available commands.", "pipeline --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { config, json } => commands::run_resolve(&config, json),
        Commands::Get { key, config } => commands::run_get(&key, &config),
        Commands::Plugins {
            section,
            category,
            config,
        } => commands::run_plugins(&section, category.as_deref(), &config),
        Commands::List { category } => commands::run_list(category.as_deref()),
        Commands::Files { dir } => commands::run_files(&dir),
    }
}
