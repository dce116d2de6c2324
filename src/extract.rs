use axum::{
    async_trait,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
    http::{self, header::CONTENT_TYPE, HeaderMap, Method},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Form,
    Other,
}

impl BodyKind {
    pub fn of(headers: &HeaderMap) -> Self {
        let mime = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/json" || mime.ends_with("+json") {
            BodyKind::Json
        } else if mime == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else {
            BodyKind::Other
        }
    }
}

/// Decodes a buffered body as JSON or as a url-encoded form, going by the
/// content type. Empty bodies and other content types yield `Ok(None)`.
pub async fn decode_body<T: DeserializeOwned>(
    headers: &HeaderMap,
    bytes: Bytes,
) -> Result<Option<T>, String> {
    if bytes.is_empty() {
        return Ok(None);
    }

    match BodyKind::of(headers) {
        BodyKind::Json => Json::<T>::from_bytes(&bytes)
            .map(|Json(value)| Some(value))
            .map_err(|e| e.body_text()),
        BodyKind::Form => {
            let req = http::Request::builder()
                .method(Method::POST)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(bytes))
                .map_err(|e| e.to_string())?;
            Form::<T>::from_request(req, &())
                .await
                .map(|Form(value)| Some(value))
                .map_err(|e| e.body_text())
        }
        BodyKind::Other => Ok(None),
    }
}

/// Request body accepted as JSON or form data. A missing body, or one in any
/// other format, becomes `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let headers = req.headers().clone();
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let value = decode_body(&headers, bytes)
            .await
            .map_err(AppError::BadRequest)?;
        Ok(Payload(value.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Login {
        name: Option<String>,
        height: Option<f64>,
    }

    fn typed(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn content_type_parameters_are_ignored() {
        assert_eq!(
            BodyKind::of(&typed("application/json; charset=utf-8")),
            BodyKind::Json
        );
        assert_eq!(
            BodyKind::of(&typed("application/x-www-form-urlencoded")),
            BodyKind::Form
        );
        assert_eq!(BodyKind::of(&typed("text/plain")), BodyKind::Other);
        assert_eq!(BodyKind::of(&HeaderMap::new()), BodyKind::Other);
    }

    #[tokio::test]
    async fn form_fields_decode() {
        let login: Option<Login> = decode_body(
            &typed("application/x-www-form-urlencoded"),
            Bytes::from_static(b"name=Andre+Martins&height=1.5"),
        )
        .await
        .unwrap();

        assert_eq!(
            login,
            Some(Login {
                name: Some("Andre Martins".to_string()),
                height: Some(1.5),
            })
        );
    }

    #[tokio::test]
    async fn empty_or_untyped_body_is_none() {
        let empty: Option<Login> = decode_body(&typed("application/json"), Bytes::new())
            .await
            .unwrap();
        assert_eq!(empty, None);

        let plain: Option<Login> =
            decode_body(&typed("text/plain"), Bytes::from_static(b"name=Yogi"))
                .await
                .unwrap();
        assert_eq!(plain, None);
    }

    #[tokio::test]
    async fn broken_json_is_an_error() {
        let result: Result<Option<Login>, String> =
            decode_body(&typed("application/json"), Bytes::from_static(b"{\"name\":"))
                .await;
        assert!(result.is_err());
    }
}
