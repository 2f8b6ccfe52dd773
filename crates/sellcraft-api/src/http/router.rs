//! Axum router configuration with middleware.
//!
//! All routes are under `/api/v1/`.
//! Middleware: CORS, tracing.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Creator wizard
        .route("/creator/state", get(handlers::creator::get_state))
        .route("/creator/ideas", post(handlers::creator::generate_ideas))
        .route(
            "/creator/ideas/{id}",
            delete(handlers::creator::delete_idea),
        )
        .route(
            "/creator/ideas/{id}/select",
            post(handlers::creator::select_idea),
        )
        .route(
            "/creator/ideas/{id}/thumbnail",
            post(handlers::creator::generate_thumbnail),
        )
        .route(
            "/creator/ideas/{id}/thumbnail-prompt",
            get(handlers::creator::thumbnail_prompt),
        )
        .route("/creator/reset", post(handlers::creator::reset))
        // Promoter
        .route("/promoter/posts", post(handlers::promoter::generate_posts))
        // Surveyor
        .route(
            "/surveyor/patterns",
            post(handlers::surveyor::generate_patterns),
        )
        .route("/surveyor/script", post(handlers::surveyor::compile_script));

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
