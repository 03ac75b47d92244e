use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;
use crate::ui::messages::{success, warning};

pub fn handle(file: &str, store: &mut RecordStore) -> AppResult<()> {
    let snapshot = ExportLogic::import(store, file)?;

    if !store.is_persistent() {
        warning("Storage is unavailable: the imported data was not saved.");
    }

    success(format!(
        "Imported {} contacts, {} deals and {} activities from {}.",
        snapshot.contacts.len(),
        snapshot.deals.len(),
        snapshot.activities.len(),
        file
    ));
    Ok(())
}
