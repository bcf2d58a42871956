pub mod delimited_file;
pub mod json_file;
pub mod ndjson_file;
pub mod record;

pub use delimited_file::ReadingsDelimitedFileSource;
pub use json_file::ReadingsJsonFileSource;
pub use ndjson_file::ReadingsNdjsonFileSource;
pub use record::ReadingRecord;

use std::path::PathBuf;

use energy_client::domain::Reading;

use crate::{
    config::SourceFormat,
    pipeline::{EnvelopeStream, Source},
};

/// File source selected by configured format.
pub enum ReadingSource {
    Json(ReadingsJsonFileSource),
    Ndjson(ReadingsNdjsonFileSource),
    Delimited(ReadingsDelimitedFileSource),
}

impl ReadingSource {
    pub fn new<P: Into<PathBuf>>(path: P, format: SourceFormat) -> Self {
        match format {
            SourceFormat::Json => Self::Json(ReadingsJsonFileSource::new(path)),
            SourceFormat::Ndjson => Self::Ndjson(ReadingsNdjsonFileSource::new(path)),
            SourceFormat::Csv => Self::Delimited(ReadingsDelimitedFileSource::csv(path)),
            SourceFormat::Dat => Self::Delimited(ReadingsDelimitedFileSource::dat(path)),
        }
    }
}

#[async_trait::async_trait]
impl Source<Reading> for ReadingSource {
    async fn stream(&self) -> EnvelopeStream<Reading> {
        match self {
            Self::Json(s) => s.stream().await,
            Self::Ndjson(s) => s.stream().await,
            Self::Delimited(s) => s.stream().await,
        }
    }
}
