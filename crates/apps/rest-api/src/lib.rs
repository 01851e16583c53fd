pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;

use axum::{
    routing::{get, put},
    Router,
};
use domain::DomainError;
use sqlx::pool::PoolConnection;
use sqlx::{PgPool, Postgres};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    /// Borrow one connection for the current request.
    ///
    /// The connection goes back to the pool when the returned guard is dropped,
    /// which happens when the handler returns on any path.
    pub async fn connection(&self) -> Result<PoolConnection<Postgres>, DomainError> {
        Ok(self.pool.acquire().await?)
    }
}

/// Health check handler
async fn health() -> &'static str {
    "OK"
}

/// Build the HTTP router with the given database pool
pub fn build_router(pool: PgPool) -> Router {
    Router::new()
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route("/users/", put(routes::users::update_user))
        .route(
            "/users/{id}",
            get(routes::users::get_user).delete(routes::users::delete_user),
        )
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { pool })
}
