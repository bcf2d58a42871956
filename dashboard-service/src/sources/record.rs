use energy_client::domain::{ChannelValues, Reading};

/// Wire shape of one reading in the dashboard's JSON / NDJSON files.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ReadingRecord {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Fridge (kWh)")]
    pub fridge_kwh: f64,
    #[serde(rename = "Oven (kWh)")]
    pub oven_kwh: f64,
    #[serde(rename = "Lights (kWh)")]
    pub lights_kwh: f64,
    #[serde(rename = "EV Charger (kWh)")]
    pub ev_charger_kwh: f64,
}

impl From<ReadingRecord> for Reading {
    fn from(r: ReadingRecord) -> Self {
        Reading::new(
            r.timestamp,
            ChannelValues::new(r.fridge_kwh, r.oven_kwh, r.lights_kwh, r.ev_charger_kwh),
        )
    }
}
