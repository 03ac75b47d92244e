//! Whole-store export and import.

use super::{ACTIVITIES_KEY, CONTACTS_KEY, DEALS_KEY, Record, RecordStore, SETTINGS_KEY};
use crate::errors::{AppError, AppResult};
use crate::models::{ACTIVITY_CAP, Activity, Contact, Deal, UserSettings, validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
    pub activities: Vec<Activity>,
    pub settings: UserSettings,
}

fn ensure_unique_ids<R: Record>(label: &str, records: &[R]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for r in records {
        if !seen.insert(r.id()) {
            return Err(AppError::Import(format!(
                "duplicate {label} id '{}'",
                r.id()
            )));
        }
    }
    Ok(())
}

impl Snapshot {
    /// Checks applied before an import replaces anything.
    pub fn validate(&self) -> AppResult<()> {
        ensure_unique_ids("contact", &self.contacts)?;
        ensure_unique_ids("deal", &self.deals)?;

        for d in &self.deals {
            validate::deal_value(d.value)
                .and_then(|_| validate::probability(d.probability))
                .map_err(|e| AppError::Import(format!("deal '{}': {e}", d.id)))?;
        }
        Ok(())
    }
}

impl RecordStore {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            contacts: self.list_contacts(),
            deals: self.list_deals(),
            activities: self.list_activities(),
            settings: self.settings(),
        }
    }

    /// Replace all four collections with `snapshot`.
    pub fn restore(&mut self, mut snapshot: Snapshot) -> AppResult<()> {
        snapshot.validate()?;
        snapshot.activities.truncate(ACTIVITY_CAP);

        let written = [
            (CONTACTS_KEY, self.save(CONTACTS_KEY, &snapshot.contacts)),
            (DEALS_KEY, self.save(DEALS_KEY, &snapshot.deals)),
            (ACTIVITIES_KEY, self.save(ACTIVITIES_KEY, &snapshot.activities)),
            (SETTINGS_KEY, self.save(SETTINGS_KEY, &snapshot.settings)),
        ];
        let failed: Vec<&str> = written
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(key, _)| *key)
            .collect();

        if failed.is_empty() {
            self.note(
                "import",
                "",
                &format!(
                    "Imported {} contacts, {} deals, {} activities",
                    snapshot.contacts.len(),
                    snapshot.deals.len(),
                    snapshot.activities.len()
                ),
            );
        } else {
            warn!(failed = ?failed, "import only partially written");
            self.note(
                "import",
                "",
                &format!("Partial import, not written: {}", failed.join(", ")),
            );
        }
        Ok(())
    }
}
