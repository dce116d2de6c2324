use sqlx::SqlitePool;

use crate::models::user::{NewUser, User};

pub async fn insert(pool: &SqlitePool, user: &NewUser) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (name, password, admin) VALUES (?, ?, ?) RETURNING id, name, password, admin",
    )
    .bind(&user.name)
    .bind(&user.password)
    .bind(user.admin)
    .fetch_one(pool)
    .await
}

pub async fn all(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT id, name, password, admin FROM users ORDER BY id")
        .fetch_all(pool)
        .await
}

/// Names are not unique; the oldest match wins.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, name, password, admin FROM users WHERE name = ? ORDER BY id LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}
