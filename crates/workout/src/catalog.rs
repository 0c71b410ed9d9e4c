use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqlitePool};
use ulid::Ulid;
use validator::Validate;

use crate::error::{WorkoutError, WorkoutResult};

/// A reusable exercise in the shared catalog. Plans reference workouts by id,
/// so renaming a workout is visible everywhere it is scheduled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkoutInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "Workout name is required"))]
    pub name: String,
}

pub async fn create_workout(
    pool: &SqlitePool,
    input: CreateWorkoutInput,
) -> WorkoutResult<Workout> {
    input.validate()?;

    let id = Ulid::new().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query("INSERT INTO workouts (id, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)")
        .bind(&id)
        .bind(&input.name)
        .bind(&now)
        .execute(pool)
        .await?;

    Ok(Workout {
        id,
        name: input.name,
        created_at: now.clone(),
        updated_at: now,
    })
}

pub async fn list_workouts(pool: &SqlitePool) -> WorkoutResult<Vec<Workout>> {
    let rows = sqlx::query(
        "SELECT id, name, created_at, updated_at FROM workouts ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    let workouts = rows
        .into_iter()
        .map(|row| Workout {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
        .collect();

    Ok(workouts)
}

pub async fn get_workout(pool: &SqlitePool, id: &str) -> WorkoutResult<Workout> {
    let row = sqlx::query("SELECT id, name, created_at, updated_at FROM workouts WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Workout {
            id: row.get("id"),
            name: row.get("name"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }),
        None => Err(WorkoutError::NotFound),
    }
}

/// Applies a partial update. Only `name` may change; any other key rejects the
/// whole request so a misspelled field never silently no-ops.
pub async fn update_workout(
    pool: &SqlitePool,
    id: &str,
    fields: serde_json::Value,
) -> WorkoutResult<Workout> {
    let object = fields
        .as_object()
        .ok_or_else(|| WorkoutError::ValidationError("invalid update".to_string()))?;

    if object.keys().any(|key| key != "name") {
        return Err(WorkoutError::ValidationError("invalid update".to_string()));
    }

    let name = object
        .get("name")
        .and_then(|value| value.as_str())
        .unwrap_or_default();

    CreateWorkoutInput {
        name: name.to_string(),
    }
    .validate()?;

    let now = Utc::now().to_rfc3339();
    let result = sqlx::query("UPDATE workouts SET name = ?1, updated_at = ?2 WHERE id = ?3")
        .bind(name)
        .bind(&now)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(WorkoutError::NotFound);
    }

    get_workout(pool, id).await
}

/// Removes a workout and every plan entry that references it, in one
/// transaction so a plan never keeps a dangling reference past the delete.
pub async fn delete_workout(pool: &SqlitePool, id: &str) -> WorkoutResult<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM workouts WHERE id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(WorkoutError::NotFound);
    }

    sqlx::query("DELETE FROM plan_entries WHERE workout_id = ?1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(())
}
