//! Identifier and payload validation.
//!
//! Pure decision functions run before any database access. Each returns
//! `CoreError::Validation` with a message suitable for direct client
//! display; internal detail never appears here.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

/// A validated playlist-creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
}

/// Parse a route-supplied identifier string.
///
/// Accepts exactly the canonical decimal form of a strictly positive
/// integer: ASCII digits only, no leading zero, no sign, no decimal point,
/// no whitespace. Everything else (including `"0"` and values that
/// overflow `i64`) rejects.
pub fn parse_route_id(raw: &str) -> Result<DbId, CoreError> {
    let well_formed = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && !raw.starts_with('0');

    if !well_formed {
        return Err(CoreError::Validation(format!(
            "'{raw}' is not a valid id, expected a positive integer"
        )));
    }

    raw.parse::<DbId>().map_err(|_| {
        CoreError::Validation(format!(
            "'{raw}' is not a valid id, expected a positive integer"
        ))
    })
}

/// Validate a playlist-creation body.
///
/// Both `name` and `description` must be present, of string type, and
/// non-empty. A missing field reports a distinct message from a mistyped
/// or empty one, but both are validation errors.
pub fn validate_new_playlist(body: &Value) -> Result<NewPlaylist, CoreError> {
    let name = require_text(body, "name")?;
    let description = require_text(body, "description")?;
    Ok(NewPlaylist { name, description })
}

/// Validate an add-track-to-playlist body.
///
/// `trackId` must be present, of integer type (floats, strings, and
/// booleans reject), and strictly positive.
pub fn validate_track_ref(body: &Value) -> Result<DbId, CoreError> {
    let field = body
        .get("trackId")
        .ok_or_else(|| CoreError::Validation("'trackId' is required".into()))?;

    match field.as_i64() {
        Some(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(
            "'trackId' must be a positive integer".into(),
        )),
    }
}

/// Extract a required non-empty string field from a JSON body.
fn require_text(body: &Value, field: &str) -> Result<String, CoreError> {
    let value = body
        .get(field)
        .ok_or_else(|| CoreError::Validation(format!("'{field}' is required")))?;

    match value.as_str() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(CoreError::Validation(format!(
            "'{field}' must be a non-empty string"
        ))),
    }
}
