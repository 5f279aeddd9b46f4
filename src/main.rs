//! Emergence CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use emergence::cli::{commands, handle_error, Cli, Commands};
use emergence::infrastructure::config::ConfigLoader;
use emergence::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli) {
        handle_error(err, json_mode);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let log_config = LogConfig::try_from(&config.logging).context("Invalid logging configuration")?;
    let _logger = LoggerImpl::init(&log_config)?;

    match cli.command {
        Commands::Evaluate(args) => commands::evaluate::execute(args, &config, cli.json),
        Commands::Breakdown(args) => commands::breakdown::execute(args, cli.json),
        Commands::Classify(args) => commands::classify::execute(args, cli.json),
        Commands::Generate(args) => commands::generate::execute(args, cli.json),
        Commands::Config => commands::config::execute(&config, cli.json),
    }
}
