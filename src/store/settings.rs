use super::{RecordStore, SETTINGS_KEY};
use crate::errors::AppResult;
use crate::models::{SettingsUpdate, UserSettings, seed};

impl RecordStore {
    pub fn settings(&self) -> UserSettings {
        self.load(SETTINGS_KEY, seed::settings)
    }

    /// Shallow-merge `changes` into the stored settings and persist them.
    pub fn update_settings(&mut self, changes: SettingsUpdate) -> AppResult<UserSettings> {
        changes.validate()?;

        let loaded = self.load_for_update(SETTINGS_KEY, seed::settings);
        let mut settings = loaded.value;
        changes.apply(&mut settings);

        if self.save_loaded(SETTINGS_KEY, &settings, loaded.writable) {
            self.note("settings", "", "Updated settings");
        }

        Ok(settings)
    }
}
