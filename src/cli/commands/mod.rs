pub mod activity;
pub mod backup;
pub mod config;
pub mod contact;
pub mod db;
pub mod deal;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod settings;
pub mod stats;

use crate::ui::messages::warning;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
