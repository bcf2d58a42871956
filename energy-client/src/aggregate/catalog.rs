use indexmap::IndexSet;

use crate::{domain::Reading, error::AggregateError};

/// Distinct calendar dates, in the order each first appears in `readings`.
pub fn distinct_dates(readings: &[Reading]) -> Result<Vec<String>, AggregateError> {
    let mut dates: IndexSet<&str> = IndexSet::new();

    for reading in readings {
        dates.insert(reading.date()?);
    }

    Ok(dates.into_iter().map(str::to_string).collect())
}

/// Dates offered by the day picker together with the current selection.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DateCatalog {
    pub dates: Vec<String>,
    pub selected: Option<String>,
}

impl DateCatalog {
    /// Builds the catalog with the first date seen as the initial selection.
    pub fn from_readings(readings: &[Reading]) -> Result<Self, AggregateError> {
        let dates = distinct_dates(readings)?;
        let selected = dates.first().cloned();
        Ok(Self { dates, selected })
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: &str) -> bool {
        self.dates.iter().any(|d| d == date)
    }

    /// Catalog with `date` selected, or `None` if the data has no such date.
    pub fn select(&self, date: &str) -> Option<Self> {
        self.contains(date).then(|| Self {
            dates: self.dates.clone(),
            selected: Some(date.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChannelValues;

    fn readings(timestamps: &[&str]) -> Vec<Reading> {
        timestamps
            .iter()
            .map(|ts| Reading::new(*ts, ChannelValues::default()))
            .collect()
    }

    #[test]
    fn dates_are_deduplicated_in_first_seen_order() {
        let input = readings(&[
            "2024-01-02 00:00:00",
            "2024-01-01 10:00:00",
            "2024-01-02 05:00:00",
            "2024-01-03 00:00:00",
        ]);

        let dates = distinct_dates(&input).unwrap();
        assert_eq!(dates, vec!["2024-01-02", "2024-01-01", "2024-01-03"]);
    }

    #[test]
    fn first_date_is_the_default_selection() {
        let input = readings(&["2024-03-05 12:00:00", "2024-03-04 12:00:00"]);
        let catalog = DateCatalog::from_readings(&input).unwrap();
        assert_eq!(catalog.selected.as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn empty_input_has_no_selection() {
        let catalog = DateCatalog::from_readings(&[]).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.selected, None);
    }

    #[test]
    fn select_only_accepts_known_dates() {
        let input = readings(&["2024-03-05 12:00:00", "2024-03-06 12:00:00"]);
        let catalog = DateCatalog::from_readings(&input).unwrap();

        let picked = catalog.select("2024-03-06").unwrap();
        assert_eq!(picked.selected.as_deref(), Some("2024-03-06"));
        assert_eq!(picked.dates, catalog.dates);
        assert!(catalog.select("2024-03-07").is_none());
    }

    #[test]
    fn malformed_timestamp_fails_the_catalog() {
        let input = readings(&["2024-03-05 12:00:00", "bad-input"]);
        let err = distinct_dates(&input).unwrap_err();
        assert_eq!(
            err,
            AggregateError::MalformedRecord {
                timestamp: "bad-input".to_string()
            }
        );
    }
}
