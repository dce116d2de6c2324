use serde::{Deserialize, Serialize};

/// A stored account. The password is kept and serialized as-is; it also ends
/// up inside issued tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password: String,
    pub admin: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub admin: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthResponse {
    pub fn failed(message: &str) -> Self {
        AuthResponse {
            success: false,
            message: message.to_string(),
            token: None,
        }
    }
}

/// Token payload: the whole user record plus issue and expiry times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub user: User,
    pub iat: usize,
    pub exp: usize,
}
