use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::store::{NotesLog, ScheduleStore};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { pdf, strict } = cmd {
        let store = ScheduleStore::new(cfg.schedule_path());
        let notes = NotesLog::new(cfg.notes_path());

        // either --strict or `strict_import: true` enables strict mode
        let strict = *strict || cfg.strict_import;

        ImportLogic::apply(&store, &notes, &expand_tilde(pdf), strict)?;
    }

    Ok(())
}
