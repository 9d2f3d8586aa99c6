//! Newtype ID for type-safe address references.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for an [`Address`](crate::Address).
///
/// Generated once at creation time and never changed afterwards. The
/// underlying representation is a string (freshly generated ids are UUIDv4),
/// which keeps the type agnostic to whatever ids already exist in the
/// backing store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(String);

impl AddressId {
    /// Wrap an existing identifier value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh, unique identifier (UUIDv4).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AddressId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<AddressId> for String {
    fn from(id: AddressId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = AddressId::generate();
        let b = AddressId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_is_valid_uuid() {
        let id = AddressId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_serde_transparent() {
        let id = AddressId::new("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");

        let back: AddressId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_display_roundtrip() {
        let id = AddressId::new("some-id");
        assert_eq!(id.to_string(), "some-id");
        assert_eq!(AddressId::from(id.to_string()), id);
    }
}
