use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, EntryForm};
use crate::errors::AppResult;
use crate::store::{NotesLog, ScheduleStore};

/// Save a manual break entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        lunch_start,
        lunch_end,
        tea_start,
        tea_end,
        date,
    } = cmd
    {
        let form = EntryForm {
            name: name.clone(),
            lunch_start: lunch_start.clone(),
            lunch_end: lunch_end.clone(),
            tea_start: tea_start.clone(),
            tea_end: tea_end.clone(),
            date: date.clone(),
        };

        let store = ScheduleStore::new(cfg.schedule_path());
        let notes = NotesLog::new(cfg.notes_path());

        AddLogic::apply(&store, &notes, &form)?;
    }

    Ok(())
}
