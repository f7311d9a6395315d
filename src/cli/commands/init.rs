use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log_note;
use crate::errors::AppResult;
use crate::store::{NotesLog, ScheduleStore};
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the schedule CSV with its header, if missing
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing rBreakScheduler…");

    if cli.test {
        info("Test mode: configuration file not written");
    } else {
        let path = cfg.save()?;
        success(format!("Config file : {}", path.display()));
    }

    let store = ScheduleStore::new(cfg.schedule_path());
    if store.ensure_created()? {
        success(format!("Schedule    : {} (created)", store.path().display()));
    } else {
        info(format!("Schedule    : {} (already present)", store.path().display()));
    }

    let notes = NotesLog::new(cfg.notes_path());
    log_note(&notes, "✔ Schedule initialized");
    info(format!("Notes log   : {}", notes.path().display()));

    println!("🎉 rBreakScheduler initialization completed!");
    Ok(())
}
