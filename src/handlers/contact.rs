use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::contact::templates::TemplateCategory;
use crate::contact::validation::{validate_submission, ContactPayload};
use crate::state::AppState;
use crate::utils::response::{function_error, function_json, function_preflight, success};

const THANK_YOU: &str = "Thank you for reaching out! I'll get back to you soon.";

pub async fn contact_preflight() -> Response {
    function_preflight()
}

/// Backend of the contact form. Always answers with the permissive CORS
/// headers so the site can call it from any origin.
pub async fn submit_contact(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let payload: ContactPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = %e, "Error in submit-contact function");
            return function_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    info!(name = ?payload.name, email = ?payload.email, "Processing contact submission");

    let contact = match validate_submission(&payload) {
        Ok(contact) => contact,
        Err(e) => return function_error(StatusCode::BAD_REQUEST, &e.to_string()),
    };

    match state.contacts.insert(&contact).await {
        Ok(saved) => {
            info!(id = %saved.id, "Contact submission saved successfully");
            function_json(
                StatusCode::OK,
                json!({ "success": true, "message": THANK_YOU, "id": saved.id }),
            )
        }
        Err(e) => {
            error!(error = ?e, "Database error");
            function_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to save contact submission",
            )
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    #[serde(default)]
    pub category: TemplateCategory,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize)]
struct RenderedTemplate {
    name: &'static str,
    message: String,
}

#[derive(Serialize)]
struct TemplateSet {
    category: TemplateCategory,
    label: &'static str,
    templates: Vec<RenderedTemplate>,
}

/// Templates of one category, already filled in with the sender's name.
pub async fn message_templates(Query(query): Query<TemplateQuery>) -> Response {
    let category = query.category;
    let templates = category
        .templates()
        .iter()
        .map(|t| RenderedTemplate {
            name: t.name,
            message: t.render(&query.name),
        })
        .collect();

    success(
        TemplateSet {
            category,
            label: category.label(),
            templates,
        },
        "Message templates",
    )
    .into_response()
}
