use std::{fs::File, path::PathBuf};

use csv::StringRecord;
use energy_client::domain::{Channel, ChannelValues, Reading};

use crate::pipeline::{Envelope, EnvelopeStream, PipelineError, Source};

/// Delimited-text source for readings (`,` for CSV exports, `|` for `.dat`).
///
/// Expected header columns (by name, any order):
/// - Timestamp
/// - Fridge (kWh)
/// - Oven (kWh)
/// - Lights (kWh)
/// - EV Charger (kWh)
pub struct ReadingsDelimitedFileSource {
    path: PathBuf,
    delimiter: u8,
}

impl ReadingsDelimitedFileSource {
    pub fn new<P: Into<PathBuf>>(path: P, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }

    pub fn csv<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, b',')
    }

    pub fn dat<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(path, b'|')
    }
}

fn record_to_reading(record: &StringRecord, headers: &StringRecord) -> Result<Reading, String> {
    let get = |name: &str| -> Result<&str, String> {
        headers
            .iter()
            .position(|h| h == name)
            .and_then(|idx| record.get(idx))
            .ok_or_else(|| format!("missing column '{name}'"))
    };

    let timestamp = get("Timestamp")?.to_string();

    let mut channels = ChannelValues::default();
    for channel in Channel::ALL {
        let raw = get(channel.column())?;
        *channels.get_mut(channel) = raw
            .parse()
            .map_err(|e| format!("invalid {} '{raw}': {e}", channel.column()))?;
    }

    Ok(Reading::new(timestamp, channels))
}

#[async_trait::async_trait]
impl Source<Reading> for ReadingsDelimitedFileSource {
    async fn stream(&self) -> EnvelopeStream<Reading> {
        // Blocking reader inside a single async task; the files are small
        // dashboard exports read once at startup.
        let path = self.path.clone();
        let delimiter = self.delimiter;
        let s = async_stream::stream! {
            let file = match File::open(&path) {
                Ok(f) => f,
                Err(e) => {
                    yield Err(PipelineError::Source(format!(
                        "failed to open delimited file '{}': {e}",
                        path.display()
                    )));
                    return;
                }
            };
            let mut rdr = csv::ReaderBuilder::new()
                .delimiter(delimiter)
                .trim(csv::Trim::All)
                .from_reader(file);
            let headers = match rdr.headers() {
                Ok(h) => h.clone(),
                Err(e) => {
                    yield Err(PipelineError::Source(format!("failed to read headers: {e}")));
                    return;
                }
            };

            for (idx, result) in rdr.records().enumerate() {
                let position = idx + 1;
                let parsed = match result {
                    Ok(record) => record_to_reading(&record, &headers),
                    Err(e) if e.is_io_error() => {
                        yield Err(PipelineError::Source(format!("record {position}: failed to read: {e}")));
                        return;
                    }
                    Err(e) => Err(e.to_string()),
                };

                // A bad record is reported on its own; later records are still read.
                match parsed {
                    Ok(reading) => {
                        yield Ok(Envelope {
                            payload: reading,
                            position,
                        });
                    }
                    Err(reason) => {
                        metrics::counter!("reading_parse_errors_total", "format" => "delimited").increment(1);
                        yield Err(PipelineError::Source(format!("record {position}: {reason}")));
                    }
                }
            }
        };

        Box::pin(s)
    }
}
