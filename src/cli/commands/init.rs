use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::insert_log;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
///  - the seed collections
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing minicrm…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {db_path}"));

    let pool = DbPool::open_initialized(&db_path)?;

    if let Err(e) = insert_log(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {db_path}"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    let store = RecordStore::initialize(pool);
    success(format!(
        "Database ready at {db_path} ({} contacts, {} deals).",
        store.list_contacts().len(),
        store.list_deals().len()
    ));
    Ok(())
}
