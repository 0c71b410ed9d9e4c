use axum::Router;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub async fn setup_test_db() -> SqlitePool {
    // One connection: every :memory: connection is its own database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

#[allow(dead_code)]
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = setup_test_db().await;

    (liftplan::create_app(pool.clone()), pool)
}
