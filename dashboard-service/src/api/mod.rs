pub mod error;
pub mod handlers;
pub mod models;

use std::sync::Arc;

use axum::{extract::Request, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;
use tracing::Level;

use crate::sinks::ReadingSnapshot;

/// Shared, read-only state behind every handler.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<ReadingSnapshot>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(snapshot: ReadingSnapshot, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            metrics,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::get_metrics))
        .route("/api/dates", get(handlers::get_dates))
        .route("/api/weekly", get(handlers::get_weekly))
        .route("/api/overview", get(handlers::get_overview))
        .route("/api/day", get(handlers::get_day))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::span!(
                        Level::INFO,
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(
                    |response: &axum::response::Response, latency: std::time::Duration, _span: &tracing::Span| {
                        tracing::event!(Level::DEBUG, status = %response.status(), latency = ?latency, "request completed");
                    },
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use energy_client::domain::{ChannelValues, Reading};
    use serde_json::Value;
    use tower::ServiceExt;

    fn reading(ts: &str, fridge: f64, oven: f64, lights: f64, ev: f64) -> Reading {
        Reading::new(ts, ChannelValues::new(fridge, oven, lights, ev))
    }

    fn router(readings: Vec<Reading>) -> Router {
        create_router(AppState::new(ReadingSnapshot::new(readings), None))
    }

    fn sample() -> Vec<Reading> {
        vec![
            reading("2024-01-01 00:30:00", 1.0, 2.0, 0.0, 0.0),
            reading("2024-01-01 01:15:00", 0.0, 0.0, 3.0, 0.0),
            reading("2024-01-02 10:00:00", 0.0, 0.0, 0.0, 4.0),
        ]
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_returns_ok() {
        assert_eq!(handlers::health().await, "ok");
    }

    #[tokio::test]
    async fn dates_lists_days_with_first_selected() {
        let (status, body) = get_json(router(sample()), "/api/dates").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["dates"], serde_json::json!(["2024-01-01", "2024-01-02"]));
        assert_eq!(body["selected"], "2024-01-01");
    }

    #[tokio::test]
    async fn weekly_has_labels_and_values() {
        let (status, body) = get_json(router(sample()), "/api/weekly").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["labels"], serde_json::json!(["2024-01-01", "2024-01-02"]));
        assert_eq!(body["values"], serde_json::json!([6.0, 4.0]));
    }

    #[tokio::test]
    async fn overview_includes_overall_split() {
        let (status, body) = get_json(router(sample()), "/api/overview").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["percentages"]["EV Charger"], 40.0);
        assert_eq!(body["weekly"]["labels"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn day_defaults_to_first_date() {
        let (status, body) = get_json(router(sample()), "/api/day").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2024-01-01");
        assert_eq!(body["hourly"]["labels"], serde_json::json!(["00", "01"]));
        assert_eq!(body["hourly"]["values"], serde_json::json!([3.0, 3.0]));
        assert_eq!(body["percentages"]["Lights"], 50.0);
    }

    #[tokio::test]
    async fn day_for_selected_date() {
        let (_, body) = get_json(router(sample()), "/api/day?date=2024-01-02").await;
        assert_eq!(body["date"], "2024-01-02");
        assert_eq!(body["percentages"]["EV Charger"], 100.0);
        assert_eq!(body["percentages"]["Fridge"], 0.0);
    }

    #[tokio::test]
    async fn unknown_date_is_an_empty_day() {
        let (status, body) = get_json(router(sample()), "/api/day?date=2030-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["hourly"]["labels"], serde_json::json!([]));
        assert_eq!(body["percentages"]["Oven"], 0.0);
    }

    #[tokio::test]
    async fn empty_snapshot_yields_empty_views() {
        let (_, dates) = get_json(router(Vec::new()), "/api/dates").await;
        assert_eq!(dates["dates"], serde_json::json!([]));
        assert!(dates["selected"].is_null());

        let (status, day) = get_json(router(Vec::new()), "/api/day").await;
        assert_eq!(status, StatusCode::OK);
        assert!(day["date"].is_null());
        assert_eq!(day["percentages"]["Fridge"], 0.0);
    }

    #[tokio::test]
    async fn malformed_timestamp_maps_to_unprocessable() {
        let mut readings = sample();
        readings.push(reading("bad-input", 1.0, 0.0, 0.0, 0.0));

        let (status, body) = get_json(router(readings), "/api/weekly").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("bad-input"));
    }

    #[tokio::test]
    async fn metrics_route_is_not_found_when_disabled() {
        let (status, body) = get_json(router(sample()), "/metrics").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "metrics are not enabled");
    }
}
