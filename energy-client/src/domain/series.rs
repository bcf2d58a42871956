use super::reading::{Channel, ChannelValues};

/// Total consumption for one calendar date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyTotal {
    pub date: String,
    pub total_kwh: f64,
}

/// Total consumption for one hour of a selected day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HourlyTotal {
    pub hour: String,
    pub total_kwh: f64,
}

/// Per-date totals in first-seen order, at most a week long.
pub type DailySeries = Vec<DailyTotal>;

/// Per-hour totals sorted ascending by two-digit hour label.
pub type HourlySeries = Vec<HourlyTotal>;

/// Share of the total each channel contributed, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ChannelPercentages(pub ChannelValues);

impl ChannelPercentages {
    /// Percentages for per-channel totals. A zero grand total yields all zeros.
    pub fn from_totals(totals: &ChannelValues) -> Self {
        let grand_total = totals.total();
        if grand_total == 0.0 {
            return Self::default();
        }
        Self(totals.map(|v| 100.0 * v / grand_total))
    }

    pub fn get(&self, channel: Channel) -> f64 {
        self.0.get(channel)
    }

    pub fn sum(&self) -> f64 {
        self.0.total()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|(_, v)| v == 0.0)
    }
}

/// Breakdown for a single selected day.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayDetail {
    pub percentages: ChannelPercentages,
    pub hourly: HourlySeries,
}

/// Chart-ready `{ labels, values }` shape consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl From<&[DailyTotal]> for ChartSeries {
    fn from(series: &[DailyTotal]) -> Self {
        let (labels, values) = series
            .iter()
            .map(|d| (d.date.clone(), d.total_kwh))
            .unzip();
        Self { labels, values }
    }
}

impl From<&[HourlyTotal]> for ChartSeries {
    fn from(series: &[HourlyTotal]) -> Self {
        let (labels, values) = series
            .iter()
            .map(|h| (h.hour.clone(), h.total_kwh))
            .unzip();
        Self { labels, values }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn percentages_serialize_as_flat_channel_map() {
        let p = ChannelPercentages::from_totals(&ChannelValues::new(1.0, 1.0, 2.0, 0.0));
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "Fridge": 25.0, "Oven": 25.0, "Lights": 50.0, "EV Charger": 0.0 })
        );
    }
}
