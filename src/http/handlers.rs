//! Endpoint handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::store::{Contact, NewContact};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}

pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = state.store.list().await?;
    Ok(Json(contacts))
}

pub async fn create_contact(
    State(state): State<AppState>,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Json(input) = payload.map_err(|_| ApiError::InvalidBody)?;

    let contact = state.store.create(&input).await?;
    tracing::info!(id = contact.id, "Contact created");

    Ok((StatusCode::CREATED, Json(contact)))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, ApiError> {
    let contact = state.store.get(id).await?;
    Ok(Json(contact))
}
