use energy_client::domain::{ChannelPercentages, ChartSeries};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct DayQuery {
    pub date: Option<String>,
}

/// Weekly trend plus the all-time channel split shown next to it.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub weekly: ChartSeries,
    pub percentages: ChannelPercentages,
}

/// Hourly chart and channel split for the selected day.
#[derive(Debug, Serialize)]
pub struct DayResponse {
    /// `None` only when there is no data to pick a default day from.
    pub date: Option<String>,
    pub percentages: ChannelPercentages,
    pub hourly: ChartSeries,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
