//! Unified API error handling with Sentry integration.
//!
//! Every route handler returns `Result<T, ApiError>`. The error-to-status
//! mapping is fixed: validation failures are 400, a missing record is 404,
//! storage failures are 500. Server-side failures are captured to Sentry
//! before responding.
//!
//! All error bodies carry a machine-readable `error` code, a `message`, and a
//! `timestamp`; validation failures add a `details` array of field/message
//! pairs and not-found adds the echoed `addressId`.

use addressbook_core::{AddressId, ValidationErrors};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{Local, NaiveDateTime};
use serde_json::json;
use thiserror::Error;

use crate::storage::StorageError;

/// Application-level error type for the address API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed validation; carries the full ordered error list.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// No record exists under the requested id.
    #[error("Address not found with id: {0}")]
    NotFound(AddressId),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Timestamp carried on error bodies, at wire precision.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture infrastructure failures to Sentry; client errors are not
        // worth tracking.
        if matches!(self, Self::Storage(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, body) = match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "VALIDATION_ERROR",
                    "message": "Address validation failed",
                    "details": errors.errors(),
                    "timestamp": now(),
                }),
            ),
            Self::NotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "ADDRESS_NOT_FOUND",
                    "message": format!("Address not found with id: {id}"),
                    "addressId": id,
                    "timestamp": now(),
                }),
            ),
            // Don't expose backing-store details to clients
            Self::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "ADDRESS_ERROR",
                    "message": "Address storage failed",
                    "timestamp": now(),
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use addressbook_core::{UpdateAddressRequest, validate_for_update};
    use http_body_util::BodyExt;

    use super::*;
    use crate::object_store::ObjectStoreError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_body() {
        let errors = validate_for_update(&UpdateAddressRequest::default()).unwrap_err();
        let response = ApiError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["message"], "Address validation failed");
        assert_eq!(body["details"][0]["field"], "request");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_not_found_body_echoes_id() {
        let response = ApiError::NotFound(AddressId::new("abc-123")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "ADDRESS_NOT_FOUND");
        assert_eq!(body["addressId"], "abc-123");
        assert_eq!(body["message"], "Address not found with id: abc-123");
    }

    #[tokio::test]
    async fn test_storage_error_is_opaque_500() {
        let io = std::io::Error::other("disk on fire");
        let err = ApiError::Storage(StorageError::Store(ObjectStoreError::Io(io)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "ADDRESS_ERROR");
        assert!(!body["message"].as_str().unwrap().contains("disk on fire"));
    }
}
