use crate::db::pool::DbPool;
use crate::db::queries::{count_log, load_kv_rows};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COLLECTIONS
    //
    let rows = load_kv_rows(&pool.conn)?;
    println!("{}• Collections:{}", CYAN, RESET);

    if rows.is_empty() {
        println!("    {GREY}(none stored yet){RESET}");
    }

    for row in &rows {
        let records = row
            .records
            .map(|n| format!("{GREEN}{n}{RESET} records"))
            .unwrap_or_else(|| format!("{GREY}object{RESET}"));
        let updated = if row.updated_at.is_empty() {
            format!("{GREY}--{RESET}")
        } else {
            row.updated_at.clone()
        };
        println!(
            "    {:<22} {} | {} bytes | updated {}",
            row.key, records, row.bytes, updated
        );
    }

    //
    // 3) JOURNAL
    //
    let log_rows = count_log(&pool.conn)?;
    println!("{}• Log entries:{} {}{}{}", CYAN, RESET, GREEN, log_rows, RESET);

    println!();
    Ok(())
}
