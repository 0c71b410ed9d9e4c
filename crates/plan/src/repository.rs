use chrono::Utc;
use liftplan_workout::Workout;
use sqlx::{Row, SqlitePool};
use ulid::Ulid;

use crate::day::Weekday;
use crate::error::{InvalidEntry, PlanError, PlanResult};
use crate::model::{
    AttachedEntry, PlanEntryInput, PlanEntryView, PlanSection, PlanView, ReplacePlanRequest,
};

/// Loads a day's plan, creating an empty one first if the day has never been
/// touched. INSERT OR IGNORE keeps concurrent first reads from racing each
/// other: whichever lands first wins, the rest see its row.
pub async fn get_or_create_plan(pool: &SqlitePool, day: Weekday) -> PlanResult<PlanView> {
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        "INSERT OR IGNORE INTO workout_plans (day, is_break_day, created_at, updated_at)
         VALUES (?1, 0, ?2, ?2)",
    )
    .bind(day.to_string())
    .bind(&now)
    .execute(pool)
    .await?;

    fetch_plan_view(pool, day).await
}

/// Checks every entry in one list against the workout catalog. Failures
/// within the list are collected before reporting, so the caller sees each
/// bad entry at once.
pub async fn validate_and_attach(
    pool: &SqlitePool,
    entries: &[PlanEntryInput],
) -> PlanResult<Vec<AttachedEntry>> {
    let mut attached = Vec::with_capacity(entries.len());
    let mut invalid = Vec::new();

    for entry in entries {
        let workout_id = match entry.workout.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => {
                invalid.push(InvalidEntry {
                    entry: entry.clone(),
                    reason: "workout id not provided".to_string(),
                });
                continue;
            }
        };

        let exists = sqlx::query("SELECT id FROM workouts WHERE id = ?1")
            .bind(workout_id)
            .fetch_optional(pool)
            .await?
            .is_some();

        if !exists {
            invalid.push(InvalidEntry {
                entry: entry.clone(),
                reason: "workout does not exist".to_string(),
            });
            continue;
        }

        attached.push(AttachedEntry {
            workout_id: workout_id.to_string(),
            note: entry.note.clone().unwrap_or_default(),
        });
    }

    if !invalid.is_empty() {
        return Err(PlanError::InvalidEntries(invalid));
    }

    Ok(attached)
}

/// Replaces a day's plan wholesale. Lists are validated one at a time in
/// warmup, workouts, cooldown order; the first list with a bad entry aborts
/// the request before anything is written. Entry ids are minted fresh on
/// every replacement.
pub async fn replace_plan(
    pool: &SqlitePool,
    day: Weekday,
    request: ReplacePlanRequest,
) -> PlanResult<PlanView> {
    let warmup = validate_and_attach(pool, &request.warmup).await?;
    let workouts = validate_and_attach(pool, &request.workouts).await?;
    let cooldown = validate_and_attach(pool, &request.cooldown).await?;

    let now = Utc::now().to_rfc3339();
    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO workout_plans (day, is_break_day, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?3)
         ON CONFLICT(day) DO UPDATE SET
             is_break_day = excluded.is_break_day,
             updated_at = excluded.updated_at",
    )
    .bind(day.to_string())
    .bind(request.is_break_day)
    .bind(&now)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM plan_entries WHERE plan_day = ?1")
        .bind(day.to_string())
        .execute(&mut *tx)
        .await?;

    let sections = [
        (PlanSection::Warmup, &warmup),
        (PlanSection::Workouts, &workouts),
        (PlanSection::Cooldown, &cooldown),
    ];

    for (section, entries) in sections {
        for (position, entry) in entries.iter().enumerate() {
            sqlx::query(
                "INSERT INTO plan_entries (id, plan_day, section, position, workout_id, note)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .bind(Ulid::new().to_string())
            .bind(day.to_string())
            .bind(section.to_string())
            .bind(position as i64)
            .bind(&entry.workout_id)
            .bind(&entry.note)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;

    fetch_plan_view(pool, day).await
}

/// Assembles the full view of a stored plan. Entries whose workout no longer
/// resolves are left out rather than surfaced half-populated.
pub async fn fetch_plan_view(pool: &SqlitePool, day: Weekday) -> PlanResult<PlanView> {
    let plan_row = sqlx::query(
        "SELECT is_break_day, created_at, updated_at FROM workout_plans WHERE day = ?1",
    )
    .bind(day.to_string())
    .fetch_one(pool)
    .await?;

    let mut plan = PlanView {
        day,
        is_break_day: plan_row.get("is_break_day"),
        warmup: Vec::new(),
        workouts: Vec::new(),
        cooldown: Vec::new(),
        created_at: plan_row.get("created_at"),
        updated_at: plan_row.get("updated_at"),
    };

    let rows = sqlx::query(
        "SELECT e.id, e.section, e.note,
                w.id AS workout_id, w.name AS workout_name,
                w.created_at AS workout_created_at, w.updated_at AS workout_updated_at
         FROM plan_entries e
         INNER JOIN workouts w ON w.id = e.workout_id
         WHERE e.plan_day = ?1
         ORDER BY e.section, e.position",
    )
    .bind(day.to_string())
    .fetch_all(pool)
    .await?;

    for row in rows {
        let section: String = row.get("section");
        let section = match section.parse::<PlanSection>() {
            Ok(section) => section,
            Err(_) => continue,
        };

        plan.section_mut(section).push(PlanEntryView {
            id: row.get("id"),
            workout: Workout {
                id: row.get("workout_id"),
                name: row.get("workout_name"),
                created_at: row.get("workout_created_at"),
                updated_at: row.get("workout_updated_at"),
            },
            note: row.get("note"),
        });
    }

    Ok(plan)
}
