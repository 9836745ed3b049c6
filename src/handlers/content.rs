use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

pub async fn site_content(State(state): State<Arc<AppState>>) -> Response {
    success(state.content.as_ref(), "Site content").into_response()
}

pub async fn content_section(
    State(state): State<Arc<AppState>>,
    Path(section): Path<String>,
) -> Result<Response, AppError> {
    let value = state
        .content
        .section(&section)
        .ok_or_else(|| AppError::NotFound(format!("Unknown content section '{}'", section)))?;
    Ok(success(value, section).into_response())
}
