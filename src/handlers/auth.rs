use axum::{extract::State, Json};

use crate::{
    db,
    error::AppError,
    extract::Payload,
    models::{
        user::{AuthResponse, LoginPayload, NewUser, User},
        MessageResponse,
    },
    AppState,
};

pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hoorray! Welcome to our API!"))
}

/// Seeds the sample account. Every call inserts another copy.
pub async fn setup(State(state): State<AppState>) -> Result<Json<MessageResponse>, AppError> {
    let user = db::users::insert(
        &state.db,
        &NewUser {
            name: "Andre Martins".to_string(),
            password: "senha".to_string(),
            admin: true,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Sample user saved");
    Ok(Json(MessageResponse::new("User saved Successfully!")))
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(db::users::all(&state.db).await?))
}

pub async fn authenticate(
    State(state): State<AppState>,
    Payload(payload): Payload<LoginPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    let Some(name) = payload.name else {
        return Ok(Json(AuthResponse::failed(
            "Authentication failed. User not found.",
        )));
    };

    let Some(user) = db::users::find_by_name(&state.db, &name).await? else {
        return Ok(Json(AuthResponse::failed(
            "Authentication failed. User not found.",
        )));
    };

    if payload.password.as_deref() != Some(user.password.as_str()) {
        return Ok(Json(AuthResponse::failed(
            "Authentication failed. Wrong password.",
        )));
    }

    let token = state.tokens.issue(&user)?;
    tracing::debug!(user_id = user.id, "Token issued");

    Ok(Json(AuthResponse {
        success: true,
        message: "Enjoy your token".to_string(),
        token: Some(token),
    }))
}
