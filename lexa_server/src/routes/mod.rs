//! HTTP route handlers and router configuration

mod health;
mod strings;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors_enabled = state.config.cors_enabled;

    let mut router = Router::new()
        .route("/health", get(health::health))
        .route("/strings", get(strings::list).post(strings::create))
        // Static segment: takes priority over `/strings/:value`, so a stored
        // string with this exact value is deleted through here
        .route(
            "/strings/filter-by-natural-language",
            get(strings::filter_by_natural_language)
                .delete(strings::delete_natural_language_segment),
        )
        .route(
            "/strings/:value",
            get(strings::get_one).delete(strings::delete),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}
