use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::router::AppState;

/// Process-wide request counter, injected through application state.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    requests: AtomicU64,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) -> u64 {
        self.requests.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
}

/// Middleware counting every inbound request.
pub async fn count_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.metrics.record_request();
    next.run(req).await
}
