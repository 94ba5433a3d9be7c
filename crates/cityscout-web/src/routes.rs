//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/location", get(handlers::location))
        .route("/weather", get(handlers::weather))
        .route("/parks", get(handlers::parks))
        .route("/movies", get(handlers::movies))
        .route("/yelp", get(handlers::yelp))
        .fallback(handlers::route_not_found)
        // Wrong verb on a known path is still just an unknown route
        .method_not_allowed_fallback(handlers::route_not_found)
        // Any origin may call us, same as it always could
        .layer(CorsLayer::permissive())
        .with_state(state)
}
