pub mod reading;
pub mod series;

pub use reading::{Channel, ChannelValues, Reading};
pub use series::{
    ChannelPercentages, ChartSeries, DailySeries, DailyTotal, DayDetail, HourlySeries, HourlyTotal,
};
