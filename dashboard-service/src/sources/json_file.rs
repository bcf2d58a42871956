use std::path::PathBuf;

use async_stream::try_stream;
use energy_client::domain::Reading;

use super::record::ReadingRecord;
use crate::pipeline::{Envelope, EnvelopeStream, PipelineError, Source};

/// Source for a single JSON array of readings, the layout of the dashboard's
/// bundled `converted_data.json`.
pub struct ReadingsJsonFileSource {
    path: PathBuf,
}

impl ReadingsJsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl Source<Reading> for ReadingsJsonFileSource {
    async fn stream(&self) -> EnvelopeStream<Reading> {
        let path = self.path.clone();
        let s = try_stream! {
            let bytes = tokio::fs::read(&path).await.map_err(|e| {
                PipelineError::Source(format!("failed to open JSON file '{}': {e}", path.display()))
            })?;

            let records: Vec<ReadingRecord> = match serde_json::from_slice(&bytes) {
                Ok(v) => v,
                Err(e) => {
                    metrics::counter!("reading_parse_errors_total", "format" => "json").increment(1);
                    Err(PipelineError::Source(format!("failed to parse JSON readings: {e}")))?
                }
            };

            for (idx, record) in records.into_iter().enumerate() {
                yield Envelope {
                    payload: Reading::from(record),
                    position: idx + 1,
                };
            }
        };

        Box::pin(s)
    }
}
