use std::ops::AddAssign;

use crate::error::AggregateError;

/// Device category a reading reports consumption for.
///
/// The set is closed: every reading carries exactly these four channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Fridge,
    Oven,
    Lights,
    EvCharger,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Fridge,
        Channel::Oven,
        Channel::Lights,
        Channel::EvCharger,
    ];

    /// Display name used by the percentage table.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Fridge => "Fridge",
            Channel::Oven => "Oven",
            Channel::Lights => "Lights",
            Channel::EvCharger => "EV Charger",
        }
    }

    /// Field name of this channel in the raw reading records.
    pub fn column(self) -> &'static str {
        match self {
            Channel::Fridge => "Fridge (kWh)",
            Channel::Oven => "Oven (kWh)",
            Channel::Lights => "Lights (kWh)",
            Channel::EvCharger => "EV Charger (kWh)",
        }
    }
}

/// One value per channel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelValues {
    #[cfg_attr(feature = "serde", serde(rename = "Fridge"))]
    pub fridge: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Oven"))]
    pub oven: f64,
    #[cfg_attr(feature = "serde", serde(rename = "Lights"))]
    pub lights: f64,
    #[cfg_attr(feature = "serde", serde(rename = "EV Charger"))]
    pub ev_charger: f64,
}

impl ChannelValues {
    pub fn new(fridge: f64, oven: f64, lights: f64, ev_charger: f64) -> Self {
        Self {
            fridge,
            oven,
            lights,
            ev_charger,
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Fridge => self.fridge,
            Channel::Oven => self.oven,
            Channel::Lights => self.lights,
            Channel::EvCharger => self.ev_charger,
        }
    }

    pub fn get_mut(&mut self, channel: Channel) -> &mut f64 {
        match channel {
            Channel::Fridge => &mut self.fridge,
            Channel::Oven => &mut self.oven,
            Channel::Lights => &mut self.lights,
            Channel::EvCharger => &mut self.ev_charger,
        }
    }

    /// Sum across all four channels, in `Channel::ALL` order.
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        Channel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            fridge: f(self.fridge),
            oven: f(self.oven),
            lights: f(self.lights),
            ev_charger: f(self.ev_charger),
        }
    }
}

impl AddAssign for ChannelValues {
    fn add_assign(&mut self, rhs: Self) {
        for channel in Channel::ALL {
            *self.get_mut(channel) += rhs.get(channel);
        }
    }
}

/// A single timestamped consumption record.
///
/// `timestamp` is kept as the literal `"YYYY-MM-DD HH:MM:SS"` string; no
/// timezone handling is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub timestamp: String,
    pub channels: ChannelValues,
}

impl Reading {
    pub fn new(timestamp: impl Into<String>, channels: ChannelValues) -> Self {
        Self {
            timestamp: timestamp.into(),
            channels,
        }
    }

    /// Calendar date portion of the timestamp (everything before the first space).
    pub fn date(&self) -> Result<&str, AggregateError> {
        self.split_timestamp().map(|(date, _)| date)
    }

    /// Two-digit hour label (`"00"`..=`"23"`) taken from the time portion.
    pub fn hour_label(&self) -> Result<&str, AggregateError> {
        let (_, time) = self.split_timestamp()?;
        let hour = time.get(..2).ok_or_else(|| self.malformed())?;

        let digits = hour.as_bytes();
        let valid = digits.iter().all(u8::is_ascii_digit)
            && (digits[0] - b'0') * 10 + (digits[1] - b'0') <= 23;
        if !valid {
            return Err(self.malformed());
        }

        Ok(hour)
    }

    fn split_timestamp(&self) -> Result<(&str, &str), AggregateError> {
        match self.timestamp.split_once(' ') {
            Some((date, time)) if !date.is_empty() => Ok((date, time)),
            _ => Err(self.malformed()),
        }
    }

    fn malformed(&self) -> AggregateError {
        AggregateError::MalformedRecord {
            timestamp: self.timestamp.clone(),
        }
    }
}
