//! Address CRUD handlers.
//!
//! Each handler follows the same one-way flow: decode input, build or merge
//! the entity, validate, call storage, encode output. Errors are shaped by
//! [`ApiError`](crate::error::ApiError).

use addressbook_core::{
    Address, AddressId, CreateAddressRequest, UpdateAddressRequest, validate_for_creation,
    validate_for_update,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Create a new address record.
///
/// POST /addresses
///
/// The constructed entity is validated as a whole (all required fields must
/// be present); validation errors come back aggregated as a 400.
///
/// # Errors
///
/// Returns `ApiError::Validation` or `ApiError::Storage`.
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateAddressRequest>,
) -> Result<(StatusCode, Json<Address>)> {
    tracing::info!("creating address");
    let address = Address::create(request);
    validate_for_creation(&address)?;

    let stored = state.storage().store(&address).await?;
    tracing::info!(id = %stored.id, "address created");

    Ok((StatusCode::CREATED, Json(stored)))
}

/// List all address records.
///
/// GET /addresses
///
/// Full listing only; order follows the store listing and is not guaranteed.
///
/// # Errors
///
/// Returns `ApiError::Storage`.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Address>>> {
    let addresses = state.storage().find_all().await?;
    Ok(Json(addresses))
}

/// Retrieve a specific address by id.
///
/// GET /addresses/{id}
///
/// # Errors
///
/// Returns `ApiError::NotFound` or `ApiError::Storage`.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Address>> {
    let id = AddressId::new(id);
    let address = state
        .storage()
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    Ok(Json(address))
}

/// Partially update an existing address.
///
/// PUT /addresses/{id}
///
/// The record must exist (404 otherwise). Only the supplied fields are
/// validated and merged; the merge refreshes `updatedAt` and preserves
/// `id`/`createdAt`. The persisted write is unconditional (last-write-wins).
///
/// # Errors
///
/// Returns `ApiError::NotFound`, `ApiError::Validation`, or
/// `ApiError::Storage`.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateAddressRequest>,
) -> Result<Json<Address>> {
    let id = AddressId::new(id);
    let existing = state
        .storage()
        .find_by_id(&id)
        .await?
        .ok_or(ApiError::NotFound(id))?;

    validate_for_update(&request)?;
    let merged = existing.apply_update(&request);
    let stored = state.storage().update(&merged).await?;
    tracing::info!(id = %stored.id, "address updated");

    Ok(Json(stored))
}

/// Delete an address record.
///
/// DELETE /addresses/{id}
///
/// Idempotent: responds 204 whether or not the record existed.
///
/// # Errors
///
/// Returns `ApiError::Storage`.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    let id = AddressId::new(id);
    state.storage().remove(&id).await?;
    tracing::info!(%id, "address deleted");

    Ok(StatusCode::NO_CONTENT)
}
