//! Date range parsing for `--range`.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// Returns inclusive bounds.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have same format".into(),
            ));
        }

        let (d1, _) = period_bounds(start)?;
        let (_, d2) = period_bounds(end)?;

        if d1 > d2 {
            return Err(AppError::InvalidRange(format!("{start} is after {end}")));
        }

        Ok((d1, d2))
    } else {
        period_bounds(r.trim())
    }
}

/// First and last day of a single YYYY / YYYY-MM / YYYY-MM-DD period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(p.to_string());

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid())?;
            let next = if d1.month() == 12 {
                NaiveDate::from_ymd_opt(d1.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(d1.year(), d1.month() + 1, 1)
            }
            .ok_or_else(invalid)?;
            let d2 = next.pred_opt().ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported --range format: {p}"
        ))),
    }
}
