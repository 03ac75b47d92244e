//! minicrm library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::pool::DbPool;
use errors::AppResult;
use store::RecordStore;
use tracing::warn;

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins over `default_level` (the configured `log_level`).
pub fn init_logging(default_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Open the configured database as the store backend, or run on seed data
/// when it cannot be opened.
pub fn open_store(cfg: &Config) -> RecordStore {
    match DbPool::open_initialized(&cfg.database) {
        Ok(pool) => RecordStore::initialize(pool),
        Err(e) => {
            warn!(database = %cfg.database, error = %e, "cannot open database, using seed data");
            RecordStore::without_storage()
        }
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Contact { action } => {
            cli::commands::contact::handle(action, &mut open_store(cfg), cfg)
        }
        Commands::Deal { action } => cli::commands::deal::handle(action, &mut open_store(cfg), cfg),
        Commands::Activity { action } => {
            cli::commands::activity::handle(action, &mut open_store(cfg))
        }
        Commands::Settings { action } => {
            cli::commands::settings::handle(action, &mut open_store(cfg))
        }
        Commands::Stats { insights } => cli::commands::stats::handle(*insights, &open_store(cfg)),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &open_store(cfg)),
        Commands::Import { file } => cli::commands::import::handle(file, &mut open_store(cfg)),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    init_logging(&cfg.log_level);

    dispatch(&cli, &cfg)
}
