use std::collections::BTreeMap;

use crate::{
    domain::{ChannelPercentages, ChannelValues, DayDetail, HourlyTotal, Reading},
    error::AggregateError,
};

/// Channel breakdown and hourly profile for a single calendar date.
///
/// Readings are matched on exact string equality of their date portion.
/// A date with no readings is not an error: it yields all-zero percentages
/// and an empty hourly series.
pub fn aggregate_day_detail(
    readings: &[Reading],
    target_date: &str,
) -> Result<DayDetail, AggregateError> {
    let mut channel_totals = ChannelValues::default();
    // Two-digit labels sort the same as the hours they name.
    let mut hourly: BTreeMap<String, f64> = BTreeMap::new();

    for reading in readings {
        if reading.date()? != target_date {
            continue;
        }

        let hour = reading.hour_label()?;
        channel_totals += reading.channels;

        let slot = hourly.entry(hour.to_string()).or_default();
        *slot += reading.channels.total();
    }

    Ok(DayDetail {
        percentages: ChannelPercentages::from_totals(&channel_totals),
        hourly: hourly
            .into_iter()
            .map(|(hour, total_kwh)| HourlyTotal { hour, total_kwh })
            .collect(),
    })
}

/// Channel breakdown across every reading, regardless of date.
pub fn aggregate_overall(readings: &[Reading]) -> Result<ChannelPercentages, AggregateError> {
    let mut channel_totals = ChannelValues::default();

    for reading in readings {
        reading.date()?;
        channel_totals += reading.channels;
    }

    Ok(ChannelPercentages::from_totals(&channel_totals))
}
