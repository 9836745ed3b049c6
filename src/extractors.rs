use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use std::convert::Infallible;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::state::AppState;
use crate::utils::error::AppError;

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

fn is_operator(parts: &Parts, state: &AppState) -> bool {
    match (&state.config.admin_token, bearer_token(parts)) {
        (Some(expected), Some(given)) => expected.as_bytes().ct_eq(given.as_bytes()).into(),
        _ => false,
    }
}

/// Present only when the request carries the operator's bearer token.
pub struct AdminSession;

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        if is_operator(parts, &app_state) {
            Ok(AdminSession)
        } else {
            debug!("Rejected event write without a valid operator token");
            Err(AppError::Unauthorized)
        }
    }
}

/// Session presence for read-only views. Never rejects.
pub struct MaybeAdmin(pub bool);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAdmin
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        Ok(MaybeAdmin(is_operator(parts, &app_state)))
    }
}
