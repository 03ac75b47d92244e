use crate::cli::parser::SettingsAction;
use crate::errors::AppResult;
use crate::models::{SettingsUpdate, UserSettings};
use crate::store::RecordStore;
use crate::ui::messages::{header, success, warning};

fn yes_no(v: bool) -> &'static str {
    if v { "on" } else { "off" }
}

fn print_settings(s: &UserSettings) {
    header("Settings");
    println!("{:<14} {:?}", "Theme", s.theme);
    println!("{:<14} {}", "Company name", s.company_name);
    println!("{:<14} {}", "Notifications", yes_no(s.notifications));
    println!("{:<14} {}", "Email alerts", yes_no(s.email_alerts));
    println!("{:<14} {} ({})", "Currency", s.currency.code(), s.currency.symbol());
    println!("{:<14} {:?}", "Language", s.language);
}

pub fn handle(action: &SettingsAction, store: &mut RecordStore) -> AppResult<()> {
    match action {
        SettingsAction::Show => {
            print_settings(&store.settings());
            Ok(())
        }
        SettingsAction::Set {
            theme,
            company_name,
            notifications,
            email_alerts,
            currency,
            language,
        } => {
            let changes = SettingsUpdate {
                theme: *theme,
                company_name: company_name.clone(),
                notifications: *notifications,
                email_alerts: *email_alerts,
                currency: *currency,
                language: *language,
            };

            if changes.is_empty() {
                warning("Nothing to change: pass at least one setting.");
                return Ok(());
            }

            let updated = store.update_settings(changes)?;
            success("Settings saved.");
            print_settings(&updated);
            Ok(())
        }
    }
}
