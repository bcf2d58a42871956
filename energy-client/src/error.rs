/// Errors raised by the aggregation engine.
///
/// A failing call returns no partial result.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("malformed reading timestamp '{timestamp}': expected \"YYYY-MM-DD HH:MM:SS\"")]
    MalformedRecord { timestamp: String },
}
