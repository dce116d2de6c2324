pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod rest;
pub mod token;

use sqlx::SqlitePool;

use crate::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(db: SqlitePool, config: &config::Config) -> Self {
        AppState {
            db,
            tokens: TokenService::new(&config.jwt_secret),
        }
    }
}
