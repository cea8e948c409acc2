use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, Config, SecurityHeaders};
use crate::handlers::{event_by_id, health_check, list_categories, search_events, upcoming_events};
use crate::services::EventQueryService;

/// Event endpoints only, without middleware.
pub fn event_routes(service: EventQueryService) -> Router {
    Router::new()
        .route("/events/upcoming", get(upcoming_events))
        .route("/events/categories", get(list_categories))
        .route("/events/search", get(search_events))
        .route("/events/:event_id", get(event_by_id))
        .with_state(service)
}

pub fn create_routes(service: EventQueryService, config: &Config) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .merge(event_routes(service))
        .layer(TraceLayer::new_for_http());

    SecurityHeaders::new(config.production)
        .apply(router)
        .layer(create_cors_layer(&config.cors_allowed_origins))
}
