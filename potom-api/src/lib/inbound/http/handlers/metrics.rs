use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn metrics(State(state): State<AppState>) -> ApiSuccess<MetricsResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        MetricsResponseData {
            requests: state.metrics.requests(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsResponseData {
    pub requests: u64,
}
