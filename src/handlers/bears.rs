use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::{
    db,
    error::AppError,
    extract::Payload,
    models::{
        bear::{Bear, BearPayload},
        user::Claims,
        MessageResponse,
    },
    AppState,
};

pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Payload(payload): Payload<BearPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let bear = db::bears::insert(&state.db, &payload).await?;
    tracing::info!(bear_id = bear.id, created_by = %claims.user.name, "Bear created");

    // A nameless bear is announced with an empty name.
    Ok(Json(MessageResponse::new(format!(
        "Bear Created - {}",
        bear.name.unwrap_or_default()
    ))))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Bear>>, AppError> {
    Ok(Json(db::bears::all(&state.db).await?))
}

/// An unknown id answers `null`, not 404.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Bear>>, AppError> {
    Ok(Json(db::bears::find(&state.db, id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(payload): Payload<BearPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let rows = db::bears::update(&state.db, id, &payload).await?;
    tracing::debug!(bear_id = id, rows, "Bear update applied");

    Ok(Json(MessageResponse::new("Bear updated")))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let rows = db::bears::delete(&state.db, id).await?;
    tracing::debug!(bear_id = id, rows, "Bear delete applied");

    Ok(Json(MessageResponse::new("Successfully deleted")))
}
