//! kubecfg CLI
//!
//! Inspect, merge and edit kubeconfig files.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use kubecfg_fs::kubeconfig_paths;
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

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let paths = kubeconfig_paths(cli.kubeconfig.as_deref());
    tracing::debug!(?paths, "Resolved kubeconfig paths");

    match cli.command {
        Some(cmd) => execute_command(cmd, &paths),
        None => {
            println!("{} kubeconfig tool", "kubecfg".green().bold());
            println!();
            println!("Run {} for available commands.", "kubecfg --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, paths: &[PathBuf]) -> Result<()> {
    match cmd {
        Commands::CurrentContext => commands::run_current_context(paths),
        Commands::GetContexts { json } => commands::run_get_contexts(paths, json),
        Commands::View { minify } => commands::run_view(paths, minify),
        Commands::Cluster { context } => commands::run_cluster(paths, context.as_deref()),
        Commands::Token { context } => commands::run_token(paths, context.as_deref()),
        Commands::UseContext { name } => commands::run_use_context(paths, &name),
        Commands::SetCredentials { name, token } => {
            commands::run_set_credentials(paths, &name, &token)
        }
        Commands::Merge {
            overlay,
            base,
            output,
        } => commands::run_merge(&overlay, &base, output.as_deref()),
    }
}
