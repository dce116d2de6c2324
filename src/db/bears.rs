use sqlx::SqlitePool;

use crate::models::bear::{Bear, BearPayload};

pub async fn insert(pool: &SqlitePool, bear: &BearPayload) -> Result<Bear, sqlx::Error> {
    sqlx::query_as::<_, Bear>(
        "INSERT INTO bears (name, height) VALUES (?, ?) RETURNING id, name, height",
    )
    .bind(&bear.name)
    .bind(bear.height)
    .fetch_one(pool)
    .await
}

pub async fn all(pool: &SqlitePool) -> Result<Vec<Bear>, sqlx::Error> {
    sqlx::query_as::<_, Bear>("SELECT id, name, height FROM bears ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Bear>, sqlx::Error> {
    sqlx::query_as::<_, Bear>("SELECT id, name, height FROM bears WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Overwrites both columns. Returns the number of rows touched, which is zero
/// when the id does not exist.
pub async fn update(pool: &SqlitePool, id: i64, bear: &BearPayload) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE bears SET name = ?, height = ? WHERE id = ?")
        .bind(&bear.name)
        .bind(bear.height)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM bears WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
