use axum::{
    body::Body,
    http::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{contact, content, events, health_check};
use crate::state::AppState;

pub fn create_routes(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/session", get(events::session_status))
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route("/api/events/timeline", get(events::event_timeline))
        .route(
            "/api/events/:id",
            put(events::update_event).delete(events::delete_event),
        )
        .route("/api/content", get(content::site_content))
        .route("/api/content/:section", get(content::content_section))
        .route("/api/contact/templates", get(contact::message_templates))
        .layer(create_cors_layer());

    // Carries its own CORS headers, including on preflight.
    let functions = Router::new().route(
        "/functions/v1/submit-contact",
        post(contact::submit_contact).options(contact::contact_preflight),
    );

    Router::new()
        .route("/health", get(health_check))
        .merge(api)
        .merge(functions)
        .layer(create_security_headers_layer())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}
