use crate::errors::AppResult;
use crate::models::break_record::{BreakRecord, HEADERS};
use crate::store::{Schedule, ScheduleStore};
use crate::ui::messages::{info, warning};
use crate::utils::range::parse_range;
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Row filter shared by `list` and `export`.
#[derive(Debug, Default, Clone)]
pub struct RecordFilter {
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub name: Option<String>,
}

impl RecordFilter {
    /// `range` uses the `--range` syntax; `None` or "all" keeps every date.
    pub fn new(range: Option<&str>, name: Option<&str>) -> AppResult<Self> {
        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        Ok(Self {
            bounds,
            name: name.map(str::to_string),
        })
    }

    /// Rows whose date is not a valid `YYYY-MM-DD` never match a date range.
    pub fn matches(&self, record: &BreakRecord) -> bool {
        if let Some(n) = &self.name
            && !record.name.eq_ignore_ascii_case(n)
        {
            return false;
        }

        match self.bounds {
            None => true,
            Some((from, to)) => record
                .parsed_date()
                .is_some_and(|d| d >= from && d <= to),
        }
    }

    pub fn apply<'a>(&self, schedule: &'a Schedule) -> Vec<&'a BreakRecord> {
        schedule.records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Warn about rows that could not be read back.
pub(crate) fn report_malformed(schedule: &Schedule) {
    if schedule.malformed > 0 {
        warning(format!(
            "{} malformed row(s) skipped (expected 6 fields)",
            schedule.malformed
        ));
    }
}

pub struct ListLogic;

impl ListLogic {
    pub fn print(store: &ScheduleStore, filter: &RecordFilter) -> AppResult<()> {
        let schedule = store.load()?;
        report_malformed(&schedule);

        let rows = filter.apply(&schedule);

        if rows.is_empty() {
            info(format!("No breaks recorded in {}", store.path().display()));
            return Ok(());
        }

        let mut table = Table::new(&HEADERS);
        for r in &rows {
            table.add_row(r.fields().iter().map(|f| f.to_string()).collect());
        }

        println!("📋 Break schedule ({}):\n", store.path().display());
        print!("{}", table.render());
        println!("\n{} row(s)", rows.len());

        Ok(())
    }
}
