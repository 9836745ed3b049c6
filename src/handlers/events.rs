use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::events::view::{partition, visible, EventFilter};
use crate::extractors::{AdminSession, MaybeAdmin};
use crate::models::EventFields;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success};

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub filter: EventFilter,
}

#[derive(Serialize)]
struct SessionPayload {
    authenticated: bool,
}

pub async fn session_status(MaybeAdmin(authenticated): MaybeAdmin) -> Response {
    success(SessionPayload { authenticated }, "Session status").into_response()
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, AppError> {
    let events = state.events.list().await?;
    let shown = visible(&events, query.filter);
    Ok(success(shown, format!("Events ({})", query.filter)).into_response())
}

pub async fn event_timeline(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, AppError> {
    let events = state.events.list().await?;
    let parts = partition(visible(&events, query.filter));
    Ok(success(parts, "Event timeline").into_response())
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Json(fields): Json<EventFields>,
) -> Result<Response, AppError> {
    let fields = fields.validated().map_err(AppError::Validation)?;
    let created = state.events.insert(&fields).await?;
    info!(event_id = %created.id, title = %created.title, "Created event");
    Ok(success(created, "Event created successfully!").into_response())
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(fields): Json<EventFields>,
) -> Result<Response, AppError> {
    let fields = fields.validated().map_err(AppError::Validation)?;
    let updated = state.events.update(&id, &fields).await?;
    info!(event_id = %updated.id, status = %updated.status, "Updated event");
    Ok(success(updated, "Event updated successfully!").into_response())
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    state.events.delete(&id).await?;
    info!(event_id = %id, "Deleted event");
    Ok(empty_success("Event deleted successfully!").into_response())
}
