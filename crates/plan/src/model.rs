use liftplan_workout::Workout;
use serde::{Deserialize, Serialize};

use crate::day::Weekday;

/// The three ordered lists a plan is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PlanSection {
    Warmup,
    Workouts,
    Cooldown,
}

impl PlanSection {
    pub const ALL: [PlanSection; 3] =
        [PlanSection::Warmup, PlanSection::Workouts, PlanSection::Cooldown];
}

/// A scheduled entry as returned to callers, with the referenced workout
/// resolved to its full catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntryView {
    pub id: String,
    pub workout: Workout,
    pub note: String,
}

/// A full plan for one weekday. There is exactly one per day; reads create it
/// on demand, so callers never see a missing plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    pub day: Weekday,
    pub is_break_day: bool,
    pub warmup: Vec<PlanEntryView>,
    pub workouts: Vec<PlanEntryView>,
    pub cooldown: Vec<PlanEntryView>,
    pub created_at: String,
    pub updated_at: String,
}

impl PlanView {
    pub fn section(&self, section: PlanSection) -> &[PlanEntryView] {
        match section {
            PlanSection::Warmup => &self.warmup,
            PlanSection::Workouts => &self.workouts,
            PlanSection::Cooldown => &self.cooldown,
        }
    }

    pub fn section_mut(&mut self, section: PlanSection) -> &mut Vec<PlanEntryView> {
        match section {
            PlanSection::Warmup => &mut self.warmup,
            PlanSection::Workouts => &mut self.workouts,
            PlanSection::Cooldown => &mut self.cooldown,
        }
    }
}

/// An input entry whose workout reference has been verified against the
/// catalog. Produced by validation, consumed by the writer.
#[derive(Debug, Clone)]
pub struct AttachedEntry {
    pub workout_id: String,
    pub note: String,
}

/// An entry as submitted by a caller. Both fields are optional so the
/// validator can report what is missing instead of failing to deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanEntryInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Full-replacement payload for a day's plan. Omitted lists clear that
/// section; an omitted flag means a regular training day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePlanRequest {
    #[serde(default)]
    pub warmup: Vec<PlanEntryInput>,
    #[serde(default)]
    pub workouts: Vec<PlanEntryInput>,
    #[serde(default)]
    pub cooldown: Vec<PlanEntryInput>,
    #[serde(default)]
    pub is_break_day: bool,
}
