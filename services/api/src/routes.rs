use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use commission_board::board::{board_router, BoardRepository, BoardService};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

pub(crate) fn with_board_routes<R>(service: Arc<BoardService<R>>) -> axum::Router
where
    R: BoardRepository + ?Sized + 'static,
{
    board_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let listening = state.readiness.load(Ordering::Relaxed);
    let store_connected = match &state.store {
        Some(db) => db.ping().await.is_ok(),
        None => false,
    };

    let status = if listening && store_connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let phase = match (listening, store_connected) {
        (true, true) => "ready",
        (true, false) => "degraded",
        (false, _) => "initializing",
    };
    let store = if store_connected {
        "connected"
    } else {
        "unavailable"
    };

    (status, Json(json!({ "status": phase, "store": store })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
