use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::{NotesLog, ScheduleStore};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        out,
        range,
        force,
    } = cmd
    {
        let store = ScheduleStore::new(cfg.schedule_path());
        let notes = NotesLog::new(cfg.notes_path());

        ExportLogic::export(&store, &notes, *format, out, range.as_deref(), *force)?;
    }

    Ok(())
}
