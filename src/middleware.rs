use axum::{
    body::{to_bytes, Body, Bytes},
    extract::{Query, Request, State},
    http::{HeaderMap, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{extract::decode_body, models::user::AuthResponse, AppState};

pub const TOKEN_HEADER: &str = "x-access-token";
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Default, Deserialize)]
struct TokenField {
    token: Option<String>,
}

/// Gate for the protected routes. The decoded [`Claims`](crate::models::user::Claims)
/// are inserted into the request extensions for the handler.
pub async fn require_token(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // The body has to be buffered to look for a token field, then put back.
    let (parts, body) = req.into_parts();
    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return Err(match token_outside_body(&parts.uri, &parts.headers) {
                Some(_) => AuthError::UnreadableBody,
                None => AuthError::MissingToken,
            })
        }
    };

    let token = extract_token(&bytes, &parts.uri, &parts.headers)
        .await
        .ok_or(AuthError::MissingToken)?;

    let claims = state.tokens.verify(&token).map_err(|e| {
        tracing::debug!("Token rejected: {}", e);
        AuthError::InvalidToken
    })?;

    let mut req = Request::from_parts(parts, Body::from(bytes));
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// Looks in the body (JSON or form), then the `token` query parameter, then
/// the `x-access-token` header. Empty values are skipped.
pub async fn extract_token(body: &Bytes, uri: &Uri, headers: &HeaderMap) -> Option<String> {
    let from_body = decode_body::<TokenField>(headers, body.clone())
        .await
        .ok()
        .flatten()
        .and_then(|field| field.token)
        .filter(|t| !t.is_empty());

    from_body.or_else(|| token_outside_body(uri, headers))
}

fn token_outside_body(uri: &Uri, headers: &HeaderMap) -> Option<String> {
    let from_query = Query::<TokenField>::try_from_uri(uri)
        .ok()
        .and_then(|Query(field)| field.token)
        .filter(|t| !t.is_empty());

    from_query.or_else(|| {
        headers
            .get(TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    })
}

#[derive(Debug)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    UnreadableBody,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // A bad token still answers 200; only a missing one is a 403.
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::FORBIDDEN, "No token provided."),
            AuthError::InvalidToken => (StatusCode::OK, "Failed to authenticate token."),
            AuthError::UnreadableBody => (StatusCode::BAD_REQUEST, "Could not read request body."),
        };

        (status, Json(AuthResponse::failed(message))).into_response()
    }
}
