//! Pure aggregation over an in-memory reading sequence.
//!
//! Every function here is deterministic and side-effect free; callers may run
//! them concurrently over the same shared slice.

mod catalog;
mod daily;
mod day_detail;

pub use catalog::{distinct_dates, DateCatalog};
pub use daily::{aggregate_daily, WEEKLY_WINDOW};
pub use day_detail::{aggregate_day_detail, aggregate_overall};
