use crate::db::pool::DbPool;
use crate::db::queries::{LogRow, load_log};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{strip_ansi, truncate};
use ansi_term::Colour;

const OP_WIDTH_MAX: usize = 60;

/// Colour of the operation word in `log --print`.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "backup" => Colour::Blue,
        "import" => Colour::Cyan,
        "settings" => Colour::White,
        "migration_applied" => Colour::Purple,
        other if other.ends_with("_add") => Colour::Green,
        other if other.ends_with("_del") => Colour::Red,
        other if other.ends_with("_edit") => Colour::Yellow,
        _ => Colour::White,
    }
}

/// `operation (target)`, cut to the column limit, operation word coloured.
fn render_op_target(row: &LogRow) -> String {
    let plain = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    let visible = truncate(&plain, OP_WIDTH_MAX);
    let color = color_for_operation(&row.operation);

    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

fn display_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(String, String)> = entries
            .iter()
            .map(|r| (display_date(&r.date), render_op_target(r)))
            .collect();

        let id_w = entries
            .iter()
            .map(|r| r.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered.iter().map(|(d, _)| d.len()).max().unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, op)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (row, (date, op_target)) in entries.iter().zip(rendered) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                row.id,
                date,
                op_target,
                padding,
                row.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(operation: &str, target: &str) -> LogRow {
        LogRow {
            id: 1,
            date: "2026-03-01T10:00:00+01:00".into(),
            operation: operation.into(),
            target: target.into(),
            message: String::new(),
        }
    }

    #[test]
    fn op_target_keeps_target_in_brackets() {
        let s = strip_ansi(&render_op_target(&row("contact_add", "17")));
        assert_eq!(s, "contact_add (17)");
    }

    #[test]
    fn long_targets_are_cut() {
        let long = "x".repeat(100);
        let s = strip_ansi(&render_op_target(&row("backup", &long)));
        assert_eq!(s.chars().count(), OP_WIDTH_MAX);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn unparsable_dates_are_shown_raw() {
        assert_eq!(display_date("yesterday"), "yesterday");
    }
}
