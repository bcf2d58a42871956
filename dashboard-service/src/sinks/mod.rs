pub mod snapshot;

pub use snapshot::{ReadingSnapshot, SnapshotSink};
