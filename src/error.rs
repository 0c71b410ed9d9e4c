use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use liftplan_plan::PlanError;
use liftplan_workout::WorkoutError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Workout(#[from] WorkoutError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// Error response body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Workout(WorkoutError::ValidationError(message)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "ValidationError".to_string(),
                    message,
                    details: None,
                },
            ),
            AppError::Workout(WorkoutError::NotFound) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "NotFoundError".to_string(),
                    message: "Workout not found".to_string(),
                    details: None,
                },
            ),
            AppError::Plan(error @ PlanError::InvalidDay(_)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "ValidationError".to_string(),
                    message: error.to_string(),
                    details: None,
                },
            ),
            AppError::Plan(PlanError::InvalidEntries(invalid)) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "ReferentialIntegrityError".to_string(),
                    message: "Invalid workouts".to_string(),
                    details: serde_json::to_value(&invalid)
                        .ok()
                        .map(|entries| serde_json::json!({ "invalidEntries": entries })),
                },
            ),
            AppError::Workout(WorkoutError::DatabaseError(error))
            | AppError::Plan(PlanError::DatabaseError(error)) => {
                tracing::error!("Database error: {:?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "InternalServerError".to_string(),
                        message: "An unexpected error occurred. Please try again later."
                            .to_string(),
                        details: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}
