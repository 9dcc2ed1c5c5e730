//! petlog library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind the provisioning command and the web form.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod google;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;
pub mod web;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Provision { .. } => cli::commands::provision::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg, config_path),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, config_path),
        Commands::Types => cli::commands::types::handle(),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics: the server logs requests, the one-shot commands only warnings
    let level = match cli.command {
        Commands::Serve { .. } => "info",
        _ => "warn",
    };
    logging::init(level);

    // 3️⃣ load config once (global --config overrides the default location)
    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load(&config_path)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
