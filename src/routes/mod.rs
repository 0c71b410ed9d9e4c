use axum::{Router, routing::get};
use sqlx::SqlitePool;

mod health;
mod plans;
mod workouts;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (only need the pool)
        .route("/status", get(health::status))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route(
            "/workouts",
            get(workouts::list_workouts).post(workouts::create_workout),
        )
        .route(
            "/workouts/{id}",
            get(workouts::get_workout)
                .put(workouts::update_workout)
                .delete(workouts::delete_workout),
        )
        .route("/workout-plans", get(plans::list_plans))
        .route(
            "/workout-plans/{day}",
            get(plans::get_plan).patch(plans::replace_plan),
        )
        .with_state(app_state)
}
