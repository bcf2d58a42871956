use energy_client::domain::Reading;
use futures::StreamExt;

use crate::pipeline::{Envelope, PipelineError, Sink};

/// Immutable, validated reading sequence in source order.
#[derive(Debug, Clone, Default)]
pub struct ReadingSnapshot {
    readings: Vec<Reading>,
    skipped: usize,
}

impl ReadingSnapshot {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self { readings, skipped: 0 }
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Records dropped during a lenient load.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Collects the pipeline output into a [`ReadingSnapshot`].
///
/// In strict mode the first upstream error aborts the load; otherwise bad
/// records are logged, counted and skipped.
pub struct SnapshotSink {
    strict: bool,
}

impl SnapshotSink {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }
}

#[async_trait::async_trait]
impl Sink<Reading> for SnapshotSink {
    type Output = ReadingSnapshot;

    async fn run<S>(&self, mut input: S) -> Result<ReadingSnapshot, PipelineError>
    where
        S: futures::Stream<Item = Result<Envelope<Reading>, PipelineError>> + Send + Unpin + 'static,
    {
        let mut readings = Vec::new();
        let mut skipped = 0usize;

        while let Some(item) = input.next().await {
            match item {
                Ok(env) => readings.push(env.payload),
                Err(e) if self.strict => {
                    tracing::error!(error = %e, "aborting reading load");
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping bad reading");
                    metrics::counter!("snapshot_readings_skipped_total").increment(1);
                    skipped += 1;
                }
            }
        }

        metrics::counter!("snapshot_readings_loaded_total").increment(readings.len() as u64);
        tracing::info!(readings = readings.len(), skipped, "reading snapshot loaded");

        Ok(ReadingSnapshot { readings, skipped })
    }
}
