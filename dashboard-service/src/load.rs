use std::{path::Path, sync::Arc};

use energy_client::domain::Reading;

use crate::{
    config::SourceFormat,
    pipeline::{Pipeline, PipelineError},
    sinks::{ReadingSnapshot, SnapshotSink},
    sources::ReadingSource,
    transform,
};

/// Read, validate and collect a readings file into a snapshot.
pub async fn load_snapshot(
    path: &Path,
    format: SourceFormat,
    strict: bool,
) -> Result<ReadingSnapshot, PipelineError> {
    tracing::info!(path = %path.display(), ?format, strict, "loading readings");

    let pipeline: Pipeline<_, Reading, _> = Pipeline {
        source: ReadingSource::new(path, format),
        transforms: vec![Arc::new(transform::ReadingValidation)],
        sink: SnapshotSink::new(strict),
    };

    let snapshot = pipeline.run().await?;
    if snapshot.is_empty() {
        tracing::warn!(path = %path.display(), "readings file contained no usable records");
    }

    Ok(snapshot)
}
