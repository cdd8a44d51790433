//! Unisearch CLI
//!
//! Inspect, parse and build unified search filters.

use anyhow::Result;
use clap::Parser;
use unisearch_core::Config;

mod app;
mod commands;
mod output;

use app::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    match cli.command {
        Commands::Filters => commands::filters::run(&config, cli.format),
        Commands::Parse(args) => commands::parse::run(args, &config, cli.format),
        Commands::Build(args) => commands::build::run(args, &config),
    }
}
