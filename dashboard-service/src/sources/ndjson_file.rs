use std::path::PathBuf;

use async_stream::stream;
use energy_client::domain::Reading;
use tokio::{fs::File, io::{AsyncBufReadExt, BufReader}};

use super::record::ReadingRecord;
use crate::pipeline::{Envelope, EnvelopeStream, PipelineError, Source};

/// A newline-delimited JSON source for readings.
///
/// Each non-blank line is one record with the same fields as the JSON array
/// source. Blank lines are skipped but still counted for positions.
pub struct ReadingsNdjsonFileSource {
    path: PathBuf,
}

impl ReadingsNdjsonFileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl Source<Reading> for ReadingsNdjsonFileSource {
    async fn stream(&self) -> EnvelopeStream<Reading> {
        let path = self.path.clone();
        let s = stream! {
            let file = match File::open(&path).await {
                Ok(f) => f,
                Err(e) => {
                    yield Err(PipelineError::Source(format!(
                        "failed to open NDJSON file '{}': {e}",
                        path.display()
                    )));
                    return;
                }
            };
            let mut lines = BufReader::new(file).lines();
            let mut position = 0usize;

            loop {
                let line = match lines.next_line().await {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        yield Err(PipelineError::Source(format!("failed to read NDJSON line: {e}")));
                        return;
                    }
                };
                position += 1;
                if line.trim().is_empty() {
                    continue;
                }

                // A bad line is reported on its own; later lines are still read.
                match serde_json::from_str::<ReadingRecord>(&line) {
                    Ok(record) => {
                        yield Ok(Envelope {
                            payload: Reading::from(record),
                            position,
                        });
                    }
                    Err(e) => {
                        metrics::counter!("reading_parse_errors_total", "format" => "ndjson").increment(1);
                        yield Err(PipelineError::Source(format!(
                            "line {position}: failed to parse reading: {e}"
                        )));
                    }
                }
            }
        };

        Box::pin(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::test_support::write_temp_file;
    use futures::StreamExt;

    #[tokio::test]
    async fn skips_blank_lines_and_keeps_positions() {
        let path = write_temp_file(
            "readings.ndjson",
            concat!(
                r#"{"Timestamp": "2024-01-01 00:30:00", "Fridge (kWh)": 1, "Oven (kWh)": 0, "Lights (kWh)": 0, "EV Charger (kWh)": 0}"#,
                "\n\n",
                r#"{"Timestamp": "2024-01-02 00:30:00", "Fridge (kWh)": 0, "Oven (kWh)": 2, "Lights (kWh)": 0, "EV Charger (kWh)": 0}"#,
                "\n",
            ),
        );

        let items: Vec<_> = ReadingsNdjsonFileSource::new(&path).stream().await.collect().await;
        let positions: Vec<_> = items.iter().map(|i| i.as_ref().unwrap().position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[tokio::test]
    async fn bad_line_is_reported_and_reading_continues() {
        let path = write_temp_file(
            "broken.ndjson",
            concat!(
                r#"{"Timestamp": "2024-01-01 00:30:00", "Fridge (kWh)": 1, "Oven (kWh)": 0, "Lights (kWh)": 0, "EV Charger (kWh)": 0}"#,
                "\n",
                "not json\n",
                r#"{"Timestamp": "2024-01-01 01:30:00", "Fridge (kWh)": 0, "Oven (kWh)": 1, "Lights (kWh)": 0, "EV Charger (kWh)": 0}"#,
                "\n",
            ),
        );

        let items: Vec<_> = ReadingsNdjsonFileSource::new(&path).stream().await.collect().await;
        assert_eq!(items.len(), 3);
        assert!(items[0].is_ok());
        match &items[1] {
            Err(PipelineError::Source(msg)) => assert!(msg.starts_with("line 2")),
            other => panic!("unexpected item: {other:?}"),
        }
        assert_eq!(items[2].as_ref().unwrap().position, 3);
    }

    #[tokio::test]
    async fn missing_file_is_a_single_error() {
        let items: Vec<_> = ReadingsNdjsonFileSource::new("/nonexistent/readings.ndjson")
            .stream()
            .await
            .collect()
            .await;
        assert!(matches!(items.as_slice(), [Err(PipelineError::Source(_))]));
    }
}
