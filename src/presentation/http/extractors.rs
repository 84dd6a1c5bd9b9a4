// src/presentation/http/extractors.rs
use crate::application::{editor::FieldErrors, error::ApplicationError};
use axum::{
    extract::{FromRequest, Request},
    http::{HeaderMap, StatusCode, header},
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use super::error::HttpError;

/// JSON request body whose decoding failures answer with the regular error body.
///
/// Type mismatches are reported per field under `fields`, keyed by the JSON path of the
/// offending value; malformed JSON is a plain 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormJson<T>(pub T);

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, HttpError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();
        match inner.classify() {
            Category::Data => {
                let field = if path == "." { "body".to_string() } else { path };
                let mut errors = FieldErrors::new();
                errors.add(field, inner.to_string());
                HttpError::from_error(ApplicationError::InvalidFields(errors))
            }
            Category::Syntax | Category::Eof | Category::Io => {
                HttpError::new(StatusCode::BAD_REQUEST, format!("malformed JSON body: {inner}"))
            }
        }
    })?;
    deserializer.end().map_err(|err| {
        HttpError::new(StatusCode::BAD_REQUEST, format!("malformed JSON body: {err}"))
    })?;
    Ok(value)
}

impl<T, S> FromRequest<S> for FormJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Err(HttpError::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "expected an application/json body",
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;
        decode(&bytes).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[allow(dead_code)]
        rating: i32,
    }

    #[test]
    fn type_mismatch_is_keyed_by_path() {
        let err = decode::<Sample>(br#"{"rating":"five"}"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn broken_json_is_bad_request() {
        let err = decode::<Sample>(br#"{"rating":"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let err = decode::<Sample>(br#"{"rating":1} trailing"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn content_type_parameters_are_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(is_json(&headers));
        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!is_json(&headers));
    }
}
