use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use energy_client::AggregateError;

use super::models::ErrorResponse;

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error("metrics are not enabled")]
    MetricsDisabled,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Aggregate(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MetricsDisabled => StatusCode::NOT_FOUND,
        };

        if status.is_client_error() {
            tracing::warn!(error = %self, %status, "request rejected");
        }
        metrics::counter!("dashboard_request_errors_total", "status" => status.as_str().to_string())
            .increment(1);

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}
