pub mod api;
pub mod config;
pub mod load;
pub mod observability;
pub mod pipeline;
pub mod sinks;
pub mod sources;
pub mod transform;

pub use load::load_snapshot;
pub use pipeline::{Envelope, Pipeline};
