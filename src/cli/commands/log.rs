use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::open_initialized(&cfg.database)?;
        LogLogic::print_log(&pool)?;
    } else {
        info("Use `minicrm log --print` to show the internal log.");
    }

    Ok(())
}
