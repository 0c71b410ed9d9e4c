use axum::{
    Json,
    extract::{Path, State},
};
use futures::future::try_join_all;
use liftplan_plan::{PlanView, ReplacePlanRequest, Weekday, repository};

use crate::error::AppError;
use crate::routes::AppState;

/// GET /workout-plans - The whole week in monday..sunday order, materializing
/// any day that has never been stored
#[tracing::instrument(skip(state))]
pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<PlanView>>, AppError> {
    let plans = try_join_all(
        Weekday::ALL
            .iter()
            .map(|day| repository::get_or_create_plan(&state.pool, *day)),
    )
    .await?;

    Ok(Json(plans))
}

/// GET /workout-plans/{day}
#[tracing::instrument(skip(state))]
pub async fn get_plan(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<PlanView>, AppError> {
    let day = Weekday::parse(&day)?;
    let plan = repository::get_or_create_plan(&state.pool, day).await?;

    Ok(Json(plan))
}

/// PATCH /workout-plans/{day} - Full replacement of the day's plan
#[tracing::instrument(skip(state, request))]
pub async fn replace_plan(
    State(state): State<AppState>,
    Path(day): Path<String>,
    Json(request): Json<ReplacePlanRequest>,
) -> Result<Json<PlanView>, AppError> {
    let day = Weekday::parse(&day)?;
    let plan = repository::replace_plan(&state.pool, day, request).await?;

    Ok(Json(plan))
}
