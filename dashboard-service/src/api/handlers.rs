use axum::{
    extract::{Query, State},
    Json,
};
use energy_client::{
    aggregate_daily, aggregate_day_detail, aggregate_overall,
    domain::{ChannelPercentages, ChartSeries},
    DateCatalog,
};

use super::{
    error::ApiError,
    models::{DayQuery, DayResponse, OverviewResponse},
    AppState,
};

pub async fn health() -> &'static str {
    "ok"
}

/// Day-picker entries and the default selection.
pub async fn get_dates(State(state): State<AppState>) -> Result<Json<DateCatalog>, ApiError> {
    metrics::counter!("dashboard_requests_total", "view" => "dates").increment(1);

    let catalog = DateCatalog::from_readings(state.snapshot.readings())?;
    Ok(Json(catalog))
}

pub async fn get_weekly(State(state): State<AppState>) -> Result<Json<ChartSeries>, ApiError> {
    metrics::counter!("dashboard_requests_total", "view" => "weekly").increment(1);

    let daily = aggregate_daily(state.snapshot.readings())?;
    Ok(Json(ChartSeries::from(daily.as_slice())))
}

pub async fn get_overview(State(state): State<AppState>) -> Result<Json<OverviewResponse>, ApiError> {
    metrics::counter!("dashboard_requests_total", "view" => "overview").increment(1);

    let readings = state.snapshot.readings();
    let daily = aggregate_daily(readings)?;
    let percentages = aggregate_overall(readings)?;

    Ok(Json(OverviewResponse {
        weekly: ChartSeries::from(daily.as_slice()),
        percentages,
    }))
}

/// Detail for `?date=`, or for the first date in the data when omitted.
pub async fn get_day(
    State(state): State<AppState>,
    Query(params): Query<DayQuery>,
) -> Result<Json<DayResponse>, ApiError> {
    metrics::counter!("dashboard_requests_total", "view" => "day").increment(1);

    let readings = state.snapshot.readings();
    let date = match params.date {
        Some(date) => Some(date),
        None => DateCatalog::from_readings(readings)?.selected,
    };

    let Some(date) = date else {
        tracing::debug!("no readings loaded; returning empty day");
        return Ok(Json(DayResponse {
            date: None,
            percentages: ChannelPercentages::default(),
            hourly: ChartSeries::default(),
        }));
    };

    let detail = aggregate_day_detail(readings, &date)?;
    if detail.hourly.is_empty() {
        tracing::debug!(%date, "no readings for requested date");
    }

    Ok(Json(DayResponse {
        date: Some(date),
        percentages: detail.percentages,
        hourly: ChartSeries::from(detail.hourly.as_slice()),
    }))
}

pub async fn get_metrics(State(state): State<AppState>) -> Result<String, ApiError> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or(ApiError::MetricsDisabled)
}
