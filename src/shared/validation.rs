//! Validation Utilities
//!
//! Identifier token parsing and validation-error translation shared by the
//! HTTP handlers and the request DTOs.

use validator::ValidationErrors;

use super::error::AppError;

/// Parse an artist id token from a path segment or request body.
///
/// Accepts only a syntactically valid non-negative base-10 integer that fits
/// in an `i64`. Anything else (empty token, sign-only, trailing characters,
/// negative values) is an [`AppError::InvalidIdentifier`]. Whether a row with
/// the parsed id exists is checked downstream, never here.
pub fn parse_artist_id(token: &str) -> Result<i64, AppError> {
    token
        .parse::<i64>()
        .ok()
        .filter(|id| *id >= 0)
        .ok_or_else(|| AppError::InvalidIdentifier(token.to_string()))
}

/// Convert validation errors to the missing-keys AppError.
///
/// `order` is the payload's declared field order; the message enumerates the
/// offending keys in exactly that order so the response is deterministic
/// regardless of the error map's iteration order.
pub fn missing_keys(errors: &ValidationErrors, order: &[&'static str]) -> AppError {
    let fields = errors.field_errors();
    let missing: Vec<&str> = order
        .iter()
        .copied()
        .filter(|name| fields.contains_key(*name))
        .collect();

    AppError::MissingFields(missing.join(", "))
}
