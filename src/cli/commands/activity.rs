use crate::cli::parser::ActivityAction;
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::{header, success, warning};
use crate::utils::Table;
use crate::utils::colors::{BLUE, CYAN, GREEN, MAGENTA, YELLOW, paint};

fn color_for_kind(kind: &str) -> &'static str {
    use crate::models::activity::kind as k;
    match kind {
        k::CONTACT_CREATED => GREEN,
        k::DEAL_CREATED => CYAN,
        k::DEAL_UPDATED => YELLOW,
        k::EMAIL_SENT => BLUE,
        k::TASK_COMPLETED => MAGENTA,
        _ => "",
    }
}

pub fn handle(action: &ActivityAction, store: &mut RecordStore) -> AppResult<()> {
    match action {
        ActivityAction::List => {
            let activities = store.list_activities();
            if activities.is_empty() {
                warning("No recent activity.");
                return Ok(());
            }

            header("Recent activity");
            let mut table = Table::new(&["Type", "Activity", "When"]);
            for a in &activities {
                table.add_row(vec![
                    paint(color_for_kind(&a.kind), &a.kind),
                    a.text.clone(),
                    a.time.clone(),
                ]);
            }
            print!("{}", table.render('-'));
            Ok(())
        }
        ActivityAction::Add { kind, text } => {
            if kind.trim().is_empty() {
                return Err(AppError::invalid("type", "is required"));
            }
            if text.trim().is_empty() {
                return Err(AppError::invalid("text", "is required"));
            }

            let activity = store.record_activity(kind.trim(), text.trim());
            success(format!("Activity recorded: {}", activity.text));
            Ok(())
        }
    }
}
