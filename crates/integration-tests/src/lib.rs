//! Integration tests for Addressbook.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server
//! ADDRESSBOOK_BUCKET_PATH=/tmp/addressbook-it cargo run -p addressbook-server
//!
//! # Run integration tests
//! cargo test -p addressbook-integration-tests -- --ignored
//! ```
//!
//! The tests drive the API over real HTTP via `reqwest` and are ignored by
//! default; they only run against a live server.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;

/// Base URL for the address API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("ADDRESSBOOK_BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string())
}

/// Create an HTTP client for test requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
