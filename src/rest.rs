use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{auth, bears},
    middleware::require_token,
    AppState,
};

pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(auth::welcome))
        .route("/setup", get(auth::setup))
        .route("/users", get(auth::list_users))
        .route("/authenticate", post(auth::authenticate));

    let protected = Router::new()
        .route("/bears", post(bears::create).get(bears::list))
        .route(
            "/bears/:bear_id",
            get(bears::show).put(bears::update).delete(bears::delete),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .nest("/api", public.merge(protected))
        .route("/api/", get(auth::welcome))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
