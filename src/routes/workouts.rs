use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use liftplan_workout::{CreateWorkoutInput, Workout};
use serde_json::json;

use crate::error::AppError;
use crate::routes::AppState;

/// GET /workouts - Full catalog, newest first
#[tracing::instrument(skip(state))]
pub async fn list_workouts(State(state): State<AppState>) -> Result<Json<Vec<Workout>>, AppError> {
    let workouts = liftplan_workout::list_workouts(&state.pool).await?;

    Ok(Json(workouts))
}

/// POST /workouts
#[tracing::instrument(skip(state, input))]
pub async fn create_workout(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkoutInput>,
) -> Result<(StatusCode, Json<Workout>), AppError> {
    let workout = liftplan_workout::create_workout(&state.pool, input).await?;

    Ok((StatusCode::CREATED, Json(workout)))
}

/// GET /workouts/{id}
#[tracing::instrument(skip(state))]
pub async fn get_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Workout>, AppError> {
    let workout = liftplan_workout::get_workout(&state.pool, &id).await?;

    Ok(Json(workout))
}

/// PUT /workouts/{id} - Rename; any field other than `name` is rejected
#[tracing::instrument(skip(state, fields))]
pub async fn update_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<serde_json::Value>,
) -> Result<Json<Workout>, AppError> {
    let workout = liftplan_workout::update_workout(&state.pool, &id, fields).await?;

    Ok(Json(workout))
}

/// DELETE /workouts/{id} - Also detaches the workout from every plan
#[tracing::instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    liftplan_workout::delete_workout(&state.pool, &id).await?;

    Ok(Json(json!({"message": "Workout deleted successfully"})))
}
