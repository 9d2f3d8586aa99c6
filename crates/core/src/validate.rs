//! Field validation and country-specific postal code rules.
//!
//! Both entry points aggregate every applicable error before reporting; the
//! single fail-fast case is an update request that supplies no fields at all.
//! Error order is check order and duplicates are kept as-is.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::address::{Address, UpdateAddressRequest};

const MAX_STREET_LENGTH: usize = 255;
const MAX_CITY_LENGTH: usize = 100;
const MAX_STATE_LENGTH: usize = 50;

// Country-specific postal code patterns, matched against the uppercased and
// trimmed postal code.
static US_POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("Invalid regex"));
static CA_POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]\d[A-Z] \d[A-Z]\d$").expect("Invalid regex"));
static UK_POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,2}\d[A-Z\d]? \d[A-Z]{2}$").expect("Invalid regex"));
static DE_POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("Invalid regex"));
static FR_POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}$").expect("Invalid regex"));

/// A single field-tagged validation failure.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ValidationError {
    /// Wire name of the offending field (`request` for request-level errors).
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation report, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("address validation failed with {} error(s)", .0.len())]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// The collected errors, in the order the checks ran.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Whether any error is tagged with the given field name.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    /// Consume the report, yielding the error list.
    #[must_use]
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

/// Validate a constructed address for creation.
///
/// All five address fields are required (non-absent, non-blank after trim);
/// street/city/state have length ceilings; the postal code is checked against
/// the country-specific pattern when both postal code and country are present.
///
/// # Errors
///
/// Returns every collected [`ValidationError`] when any check fails.
pub fn validate_for_creation(address: &Address) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();

    require_field("street", address.street.as_deref(), &mut errors);
    require_field("city", address.city.as_deref(), &mut errors);
    require_field("state", address.state.as_deref(), &mut errors);
    require_field("postalCode", address.postal_code.as_deref(), &mut errors);
    require_field("country", address.country.as_deref(), &mut errors);

    // Length ceilings apply whenever the field is present, independently of
    // the required-field pass above.
    if let Some(street) = &address.street
        && street.chars().count() > MAX_STREET_LENGTH
    {
        errors.push(ValidationError::new(
            "street",
            format!("Street must not exceed {MAX_STREET_LENGTH} characters"),
        ));
    }

    if let Some(city) = &address.city
        && city.chars().count() > MAX_CITY_LENGTH
    {
        errors.push(ValidationError::new(
            "city",
            format!("City must not exceed {MAX_CITY_LENGTH} characters"),
        ));
    }

    if let Some(state) = &address.state
        && state.chars().count() > MAX_STATE_LENGTH
    {
        errors.push(ValidationError::new(
            "state",
            format!("State must not exceed {MAX_STATE_LENGTH} characters"),
        ));
    }

    if let (Some(postal_code), Some(country)) = (&address.postal_code, &address.country) {
        check_postal_code(postal_code, country, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validate a partial-update request.
///
/// Fails fast with a single `request`-tagged error when no field is supplied
/// at all. Otherwise each supplied field must be non-blank, street/city/state
/// keep their creation length ceilings, and the postal pattern is checked
/// only when both postal code and country appear in the same request.
///
/// # Errors
///
/// Returns every collected [`ValidationError`] when any check fails.
pub fn validate_for_update(request: &UpdateAddressRequest) -> Result<(), ValidationErrors> {
    if request.is_empty() {
        return Err(ValidationErrors(vec![ValidationError::new(
            "request",
            "At least one field must be provided for update",
        )]));
    }

    let mut errors = Vec::new();

    if let Some(street) = &request.street {
        if street.trim().is_empty() {
            errors.push(ValidationError::new("street", "Street cannot be empty"));
        } else if street.chars().count() > MAX_STREET_LENGTH {
            errors.push(ValidationError::new(
                "street",
                format!("Street must not exceed {MAX_STREET_LENGTH} characters"),
            ));
        }
    }

    if let Some(city) = &request.city {
        if city.trim().is_empty() {
            errors.push(ValidationError::new("city", "City cannot be empty"));
        } else if city.chars().count() > MAX_CITY_LENGTH {
            errors.push(ValidationError::new(
                "city",
                format!("City must not exceed {MAX_CITY_LENGTH} characters"),
            ));
        }
    }

    if let Some(state) = &request.state {
        if state.trim().is_empty() {
            errors.push(ValidationError::new("state", "State cannot be empty"));
        } else if state.chars().count() > MAX_STATE_LENGTH {
            errors.push(ValidationError::new(
                "state",
                format!("State must not exceed {MAX_STATE_LENGTH} characters"),
            ));
        }
    }

    if let Some(postal_code) = &request.postal_code
        && postal_code.trim().is_empty()
    {
        errors.push(ValidationError::new(
            "postalCode",
            "Postal code cannot be empty",
        ));
    }

    if let Some(country) = &request.country
        && country.trim().is_empty()
    {
        errors.push(ValidationError::new("country", "Country cannot be empty"));
    }

    // Format is only checkable when the request carries both values; a postal
    // code arriving alone is validated against the stored country by the
    // caller's merge-then-validate flow.
    if let (Some(postal_code), Some(country)) = (&request.postal_code, &request.country) {
        check_postal_code(postal_code, country, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Check a postal code against the pattern for its country.
///
/// Unrecognized country codes are always accepted: the dispatch table is a
/// closed set and the default branch is deliberately permissive.
fn check_postal_code(postal_code: &str, country: &str, errors: &mut Vec<ValidationError>) {
    let postal_code = postal_code.trim().to_uppercase();
    let country = country.trim().to_uppercase();

    let valid = match country.as_str() {
        "US" => US_POSTAL_CODE.is_match(&postal_code),
        "CA" => CA_POSTAL_CODE.is_match(&postal_code),
        "GB" | "UK" => UK_POSTAL_CODE.is_match(&postal_code),
        "DE" => DE_POSTAL_CODE.is_match(&postal_code),
        "FR" => FR_POSTAL_CODE.is_match(&postal_code),
        _ => true,
    };

    if !valid {
        errors.push(ValidationError::new(
            "postalCode",
            format!("Invalid postal code format for country {country}"),
        ));
    }
}

fn require_field(field: &str, value: Option<&str>, errors: &mut Vec<ValidationError>) {
    if value.is_none_or(|v| v.trim().is_empty()) {
        errors.push(ValidationError::new(field, format!("{field} is required")));
    }
}
