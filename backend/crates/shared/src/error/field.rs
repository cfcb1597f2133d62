//! Field Error - Per-field validation failure
//!
//! A [`FieldError`] points at one offending input location, e.g.
//! `["body", "age"]` or `["query", "limit"]`.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Where in the request the offending value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Query,
    Path,
}

impl Location {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Query => "query",
            Location::Path => "path",
        }
    }
}

/// One validation failure
///
/// ## Examples
/// ```rust
/// use kernel::error::field::{FieldError, Location};
///
/// let err = FieldError::missing(Location::Body, "age");
/// assert_eq!(err.loc, vec!["body", "age"]);
/// assert_eq!(err.kind, "missing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Path to the offending value, outermost first
    pub loc: Vec<Cow<'static, str>>,
    /// Human-readable message
    pub msg: Cow<'static, str>,
    /// Machine-readable error code
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl FieldError {
    pub fn new(
        location: Location,
        field: Option<&str>,
        kind: &'static str,
        msg: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::at_path(location, field.map(str::to_string), kind, msg)
    }

    /// Failure at a nested location, e.g. `["body", "address", "city"]`
    pub fn at_path<I, P>(
        location: Location,
        path: I,
        kind: &'static str,
        msg: impl Into<Cow<'static, str>>,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Cow<'static, str>>,
    {
        let mut loc = vec![Cow::Borrowed(location.as_str())];
        loc.extend(path.into_iter().map(Into::into));
        Self {
            loc,
            msg: msg.into(),
            kind,
        }
    }

    /// Required field absent
    pub fn missing(location: Location, field: &str) -> Self {
        Self::new(location, Some(field), "missing", "Field required")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}
