//! The `Address` entity and its wire representation.
//!
//! An address is an immutable snapshot: the create and update operations
//! return new values rather than mutating in place. The five address fields
//! are optional at the data level - whether they are required is decided by
//! the [`validate`](crate::validate) module, not by the type.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::AddressId;

/// Current local timestamp at the precision carried on the wire.
fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// An address record.
///
/// Serializes to the wire JSON shape exchanged over HTTP and persisted in the
/// object store: camelCase field names, timestamps as ISO local date-time
/// strings with no timezone offset (e.g. `2026-08-26T10:15:30.123`). The
/// serde round-trip is exact at the serialized precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Opaque unique identifier, assigned exactly once at creation.
    pub id: AddressId,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// Set at creation, immutable thereafter.
    pub created_at: NaiveDateTime,
    /// Refreshed on every successful update; never earlier than `created_at`.
    pub updated_at: NaiveDateTime,
}

/// Creation input: any subset of the five address fields.
///
/// This is the decoded body of `POST /addresses`. Missing keys become `None`;
/// no validation happens during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressRequest {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Partial-update input: only the fields to change.
///
/// Absent fields are left untouched by the merge. Never persisted directly -
/// it exists only to compute a merged [`Address`]. Note that an explicit
/// `null` on the wire is indistinguishable from an omitted key, so both mean
/// "retain the existing value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressRequest {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl UpdateAddressRequest {
    /// Whether every one of the five fields is absent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
            && self.country.is_none()
    }
}

impl Address {
    /// Create a new address from a creation request.
    ///
    /// Generates a fresh unique identifier and sets both timestamps to the
    /// same "now" instant. Fields are copied as given; no validation is
    /// performed here.
    #[must_use]
    pub fn create(request: CreateAddressRequest) -> Self {
        let now = now();
        Self {
            id: AddressId::generate(),
            street: request.street,
            city: request.city,
            state: request.state,
            postal_code: request.postal_code,
            country: request.country,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge an update request into this address, returning the new value.
    ///
    /// For each field the request's value wins when present, otherwise the
    /// existing value is retained. `id` and `created_at` are carried over
    /// unconditionally; `updated_at` is refreshed.
    #[must_use]
    pub fn apply_update(&self, request: &UpdateAddressRequest) -> Self {
        Self {
            id: self.id.clone(),
            street: request.street.clone().or_else(|| self.street.clone()),
            city: request.city.clone().or_else(|| self.city.clone()),
            state: request.state.clone().or_else(|| self.state.clone()),
            postal_code: request
                .postal_code
                .clone()
                .or_else(|| self.postal_code.clone()),
            country: request.country.clone().or_else(|| self.country.clone()),
            created_at: self.created_at,
            updated_at: now(),
        }
    }
}
