//! Project Bootstrap CLI
//!
//! The command-line interface for setting up and validating a project
//! working copy.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

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

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} Project Bootstrap CLI", "bootstrap".green().bold());
            println!();
            println!("Run {} for available commands.", "bootstrap --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Setup { script } => commands::run_setup(&script),
        Commands::Validate { yaml } => commands::run_validate(&yaml),
        Commands::CloneRepos { manifest } => commands::run_clone_repos(&manifest),
        Commands::Link { target, link } => commands::run_link(&target, &link),
        Commands::CheckDirs { dirs } => commands::run_check_dirs(&dirs),
        Commands::CheckEnv {
            expected_prefix,
            require_secondary,
            env_var,
            primary,
            secondary,
        } => commands::run_check_env(
            &expected_prefix,
            require_secondary,
            env_var,
            primary,
            secondary,
        ),
    }
}
