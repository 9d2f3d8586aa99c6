//! Addressbook Core - Domain types and validation.
//!
//! This crate provides the domain model shared across Addressbook components:
//! - `server` - HTTP service exposing the address CRUD API
//! - `integration-tests` - End-to-end tests against a running server
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no store access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`address`] - The `Address` entity, its wire representation, and the
//!   create/merge operations
//! - [`types`] - Newtype wrappers for type-safe identifiers
//! - [`validate`] - Field validation and country-specific postal code rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod address;
pub mod types;
pub mod validate;

pub use address::{Address, CreateAddressRequest, UpdateAddressRequest};
pub use types::AddressId;
pub use validate::{ValidationError, ValidationErrors, validate_for_creation, validate_for_update};
