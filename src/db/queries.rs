use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// A row of the `kv` table, as shown by `db --info`.
#[derive(Debug, Clone)]
pub struct KvRow {
    pub key: String,
    pub bytes: usize,
    pub records: Option<usize>,
    pub updated_at: String,
}

/// A row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_value(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

pub fn store_value(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

pub fn load_kv_rows(conn: &Connection) -> AppResult<Vec<KvRow>> {
    let mut stmt = conn.prepare("SELECT key, value, updated_at FROM kv ORDER BY key ASC")?;

    let rows = stmt.query_map([], |row| {
        let key: String = row.get(0)?;
        let value: String = row.get(1)?;
        let updated_at: String = row.get(2)?;
        Ok((key, value, updated_at))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (key, value, updated_at) = r?;
        // Arrays report their length; the settings object does not.
        let records = serde_json::from_str::<serde_json::Value>(&value)
            .ok()
            .and_then(|v| v.as_array().map(Vec::len));
        out.push(KvRow {
            key,
            bytes: value.len(),
            records,
            updated_at,
        });
    }
    Ok(out)
}

/// Append a row to the internal log (`date` is local RFC 3339).
pub fn insert_log(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;
    Ok(())
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_log(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    Ok(n)
}
