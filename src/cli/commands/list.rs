use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::{ListLogic, RecordFilter};
use crate::errors::AppResult;
use crate::store::ScheduleStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { range, name } = cmd {
        let filter = RecordFilter::new(range.as_deref(), name.as_deref())?;
        let store = ScheduleStore::new(cfg.schedule_path());

        ListLogic::print(&store, &filter)?;
    }

    Ok(())
}
