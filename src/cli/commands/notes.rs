use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notes::NotesLogic;
use crate::errors::AppResult;
use crate::store::NotesLog;

/// Printing is the only action, `--print` is accepted but not required.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Notes { .. }) {
        let notes = NotesLog::new(cfg.notes_path());
        NotesLogic::print(&notes)?;
    }

    Ok(())
}
