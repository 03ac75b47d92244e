// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ActivityExport, ContactExport, DealExport};
use crate::export::{ExportCollection, ExportFormat};
use crate::store::{RecordStore, Snapshot};
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;

/// High-level export/import entry points.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the store to `file`.
    ///
    /// JSON always carries all four collections; CSV writes the one named
    /// by `collection` (contacts when omitted).
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        collection: Option<ExportCollection>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Json => {
                if collection.is_some() {
                    warning("--collection is ignored for JSON: the whole store is exported.");
                }
                export_json(&store.snapshot(), path)
            }
            ExportFormat::Csv => match collection.unwrap_or(ExportCollection::Contacts) {
                ExportCollection::Contacts => {
                    let rows: Vec<ContactExport> =
                        store.list_contacts().iter().map(ContactExport::from).collect();
                    export_csv(&rows, path)
                }
                ExportCollection::Deals => {
                    let rows: Vec<DealExport> =
                        store.list_deals().iter().map(DealExport::from).collect();
                    export_csv(&rows, path)
                }
                ExportCollection::Activities => {
                    let rows: Vec<ActivityExport> = store
                        .list_activities()
                        .iter()
                        .map(ActivityExport::from)
                        .collect();
                    export_csv(&rows, path)
                }
            },
        }
    }

    /// Replace the store content with a JSON export.
    pub fn import(store: &mut RecordStore, file: &str) -> AppResult<Snapshot> {
        let path = Path::new(file);
        if !path.exists() {
            return Err(AppError::Import(format!("file not found: {file}")));
        }

        info(format!("Importing from JSON: {}", path.display()));

        let raw = fs::read_to_string(path)?;
        let snapshot: Snapshot = serde_json::from_str(&raw)
            .map_err(|e| AppError::Import(format!("{}: {e}", path.display())))?;

        store.restore(snapshot.clone())?;
        Ok(snapshot)
    }
}
