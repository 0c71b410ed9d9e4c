pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;

pub use config::Config;
pub use error::{AppError, ErrorResponse};
pub use routes::AppState;

/// Create the app router
///
/// This builds the Axum router with every route configured, useful for
/// integration testing without starting the full server.
pub fn create_app(pool: sqlx::SqlitePool) -> axum::Router {
    routes::router(AppState { pool })
}
