//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::kv::KeyValueStorage;
use crate::db::migrate::run_pending_migrations;
use crate::db::queries;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open `path` and make sure the schema is in place.
    pub fn open_initialized(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        run_pending_migrations(&pool.conn)?;
        Ok(pool)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}

impl KeyValueStorage for DbPool {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        queries::load_value(&self.conn, key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        queries::store_value(&self.conn, key, value)
    }

    fn journal(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        queries::insert_log(&self.conn, operation, target, message)
    }
}
