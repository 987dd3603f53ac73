use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_group::create_group;
use super::handlers::create_user::create_user;
use super::handlers::get_user::get_user;
use super::handlers::healthz::healthz;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::metrics::metrics;
use super::handlers::refresh::refresh;
use super::handlers::reset_users::reset_users;
use super::handlers::revoke::revoke;
use super::handlers::update_user::update_user;
use super::metrics::count_requests;
use super::metrics::RequestMetrics;
use super::middleware::authenticate as auth_middleware;
use crate::config::Platform;
use crate::domain::group::ports::GroupServicePort;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub group_service: Arc<dyn GroupServicePort>,
    pub session_service: Arc<dyn SessionServicePort>,
    pub metrics: Arc<RequestMetrics>,
    pub platform: Platform,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/healthz", get(healthz))
        .route("/api/metrics", get(metrics))
        .route(
            "/api/users",
            post(create_user).get(list_users).delete(reset_users),
        )
        .route("/api/users/:user_id", get(get_user))
        .route("/api/login", post(login))
        .route("/api/refresh", post(refresh).delete(revoke))
        .route("/api/revoke", post(revoke));

    let protected_routes = Router::new()
        .route("/api/users/:user_id", put(update_user))
        .route("/api/groups", post(create_group))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
