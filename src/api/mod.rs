//! HTTP surface: route tables, handlers, and router assembly.

pub mod handlers;
pub mod routes;

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .merge(routes::medico_routes())
        .merge(routes::paciente_routes())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors_origins;

    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}
