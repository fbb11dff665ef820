//! Spotbook library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } => cli::commands::login::handle(cli, cfg),
        Commands::Logout => cli::commands::logout::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Confirm { .. } | Commands::Release { .. } | Commands::Reserve { .. } => {
            cli::commands::transitions::handle(cli, cfg)
        }
        Commands::Replace { .. } => cli::commands::replace::handle(cli, cfg),
        Commands::Reassign { .. } => cli::commands::reassign::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // Apply the workbook override from the command line, if any
    if let Some(custom_book) = &cli.book {
        cfg.workbook = custom_book.clone();
    }

    dispatch(&cli, &cfg)
}
