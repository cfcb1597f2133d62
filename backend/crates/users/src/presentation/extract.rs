//! Request Extractors

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::UserError;
use crate::presentation::validation::decode_body;

/// JSON object body deserialized into `T`.
///
/// Rejections keep their HTTP meaning: an oversized body is 413, an
/// unreadable one is 400, and every other failure (content type, syntax,
/// shape, field types) is [`UserError::Validation`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = UserError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;

        decode_body(value)
            .map(ValidatedJson)
            .map_err(|e| UserError::Validation(vec![e]))
    }
}
