//! Boundary Validation
//!
//! Turns raw query values and serde failures into [`FieldError`]s
//! before any use case executes.

use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;

use kernel::error::field::{FieldError, Location};

/// Validate the raw `limit` query value.
///
/// `None` means "use the default". Non-integers and negatives are rejected.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, FieldError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let limit: i64 = raw.trim().parse().map_err(|_| {
        FieldError::new(
            Location::Query,
            Some("limit"),
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer",
        )
    })?;

    if limit < 0 {
        return Err(FieldError::new(
            Location::Query,
            Some("limit"),
            "greater_than_equal",
            "Input should be greater than or equal to 0",
        ));
    }

    Ok(Some(usize::try_from(limit).unwrap_or(usize::MAX)))
}

/// Deserialize a JSON object body into `T`.
///
/// Non-object bodies are rejected up front; otherwise the first field
/// serde trips over is reported.
pub fn decode_body<T: DeserializeOwned>(value: Value) -> Result<T, FieldError> {
    if !value.is_object() {
        return Err(FieldError::new(
            Location::Body,
            None,
            "model_attributes_type",
            "Input should be a valid dictionary or object",
        ));
    }

    serde_path_to_error::deserialize(value).map_err(body_data_error)
}

/// Map a typed-deserialization failure to the offending body field.
///
/// serde stops at the first failure, so only one field is reported.
fn body_data_error(err: serde_path_to_error::Error<serde_json::Error>) -> FieldError {
    let msg = err.inner().to_string();

    let mut path: Vec<String> = err
        .path()
        .iter()
        .filter_map(|segment| match segment {
            Segment::Map { key } => Some(key.clone()),
            Segment::Seq { index } => Some(index.to_string()),
            _ => None,
        })
        .collect();

    if let Some(field) = missing_field(&msg) {
        path.push(field.to_string());
        return FieldError::at_path(Location::Body, path, "missing", "Field required");
    }

    let kind = if msg.starts_with("invalid type") {
        "invalid_type"
    } else {
        "value_error"
    };

    FieldError::at_path(Location::Body, path, kind, msg)
}

/// Field name out of serde's "missing field `x`" message
fn missing_field(msg: &str) -> Option<&str> {
    msg.strip_prefix("missing field `")?.split('`').next()
}
