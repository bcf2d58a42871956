pub mod aggregate;
pub mod domain;
pub mod error;

pub use aggregate::{
    aggregate_daily, aggregate_day_detail, aggregate_overall, distinct_dates, DateCatalog,
    WEEKLY_WINDOW,
};
pub use error::AggregateError;
