use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration (file values merged with defaults).
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (run `minicrm init`).",
                path.display()
            ));
            return Ok(());
        }

        let report = migrate::check(path)?;
        if report.is_clean() {
            success("Configuration file is up to date.");
            return Ok(());
        }

        for key in &report.missing {
            warning(format!("Missing key: {key}"));
        }
        for key in &report.unknown {
            info(format!("Unknown key (ignored): {key}"));
        }
        if !report.missing.is_empty() {
            info("Run `minicrm config --migrate` to add the missing keys.");
        }
        Ok(())
    }

    pub fn migrate(path: &Path) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (run `minicrm init`).",
                path.display()
            ));
            return Ok(());
        }

        let added = migrate::migrate(path)?;
        if added.is_empty() {
            info("Nothing to migrate.");
        } else {
            success(format!("Configuration updated, added: {}", added.join(", ")));
        }
        Ok(())
    }

    /// Open `path` in `editor`, then in the platform default if that fails.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            return Ok(());
        }

        warning(format!(
            "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
        ));

        if run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{default_editor}'"
            ));
        } else {
            error(format!(
                "Failed to edit configuration file using fallback '{default_editor}'"
            ));
        }
        Ok(())
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    Command::new(editor)
        .arg(path)
        .status()
        .is_ok_and(|s| s.success())
}
