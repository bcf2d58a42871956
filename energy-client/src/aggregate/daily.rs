use indexmap::IndexMap;

use crate::{
    domain::{DailySeries, DailyTotal, Reading},
    error::AggregateError,
};

/// Number of days shown by the weekly trend.
pub const WEEKLY_WINDOW: usize = 7;

/// Sum all channels per calendar date.
///
/// Dates keep the order they first appear in `readings` (the input is
/// expected in non-decreasing timestamp order) and only the first
/// [`WEEKLY_WINDOW`] dates are returned.
pub fn aggregate_daily(readings: &[Reading]) -> Result<DailySeries, AggregateError> {
    let mut totals: IndexMap<&str, f64> = IndexMap::new();

    for reading in readings {
        let date = reading.date()?;
        *totals.entry(date).or_default() += reading.channels.total();
    }

    Ok(totals
        .into_iter()
        .take(WEEKLY_WINDOW)
        .map(|(date, total_kwh)| DailyTotal {
            date: date.to_string(),
            total_kwh,
        })
        .collect())
}
