use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::info;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    info!(version = %version, "{message}");
    Ok(())
}

/// Key-value table holding one serialized collection per key.
fn migrate_create_kv_table(conn: &Connection) -> AppResult<()> {
    let version = "20260101_0001_create_kv";
    if is_applied(conn, version)? {
        return Ok(());
    }

    if table_exists(conn, "kv")? {
        // Created by hand or by an earlier build: only the marker is missing.
        mark_applied(conn, version, "kv table already present")?;
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;

    mark_applied(conn, version, "Created kv table")
}

/// Early kv tables had no `updated_at` column.
fn migrate_add_updated_at(conn: &Connection) -> AppResult<()> {
    let version = "20260215_0002_kv_updated_at";
    if is_applied(conn, version)? {
        return Ok(());
    }

    if !column_exists(conn, "kv", "updated_at")? {
        conn.execute(
            "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )
        .map_err(|e| AppError::Migration(format!("Failed to add 'updated_at' to kv: {e}")))?;
    }

    mark_applied(conn, version, "Added updated_at to kv")
}

/// Public entry point: run all pending migrations.
///
/// Called whenever a `DbPool` is opened for the store.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    migrate_create_kv_table(conn)?;
    migrate_add_updated_at(conn)?;
    Ok(())
}
