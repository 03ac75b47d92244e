use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, store: &RecordStore) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        collection,
        force,
    } = cmd
    {
        ExportLogic::export(store, *format, file, *collection, *force)?;
    }

    Ok(())
}
