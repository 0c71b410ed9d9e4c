use liftplan_plan::{
    PlanEntryInput, PlanEntryView, PlanSection, PlanView, ReplacePlanRequest, Weekday,
};
use liftplan_workout::Workout;
use ulid::Ulid;

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

/// A stateful planning session over the cached week.
///
/// Edits are applied to the local cache first, then the whole day is sent to
/// the server and the cached plan is swapped for the server's reconciled
/// copy. When the server rejects an edit the local cache keeps the rejected
/// state; callers surface the error and [`PlannerSession::refresh`] restores
/// the stored plan.
pub struct PlannerSession {
    api: ApiClient,
    pub workouts: Vec<Workout>,
    pub plans: Vec<PlanView>,
    pub selected_day: Weekday,
}

impl PlannerSession {
    /// Loads the full week and the workout catalog, then selects today.
    pub async fn start(api: ApiClient) -> ClientResult<Self> {
        let plans = api.list_plans().await?;
        let workouts = api.list_workouts().await?;

        Ok(PlannerSession {
            api,
            workouts,
            plans,
            selected_day: Weekday::today_utc(),
        })
    }

    pub fn select_day(&mut self, day: Weekday) {
        self.selected_day = day;
    }

    pub fn plan(&self, day: Weekday) -> Option<&PlanView> {
        self.plans.iter().find(|plan| plan.day == day)
    }

    pub fn selected_plan(&self) -> Option<&PlanView> {
        self.plan(self.selected_day)
    }

    pub async fn toggle_break_day(&mut self, day: Weekday, value: bool) -> ClientResult<&PlanView> {
        self.plan_mut(day)?.is_break_day = value;
        self.persist(day).await
    }

    /// Adds a workout to one section of a day's plan and persists the change.
    /// The local entry gets a provisional id; the server's reconciled plan
    /// replaces it on success.
    pub async fn add_entry(
        &mut self,
        day: Weekday,
        section: PlanSection,
        workout_id: &str,
        note: Option<&str>,
    ) -> ClientResult<&PlanView> {
        let workout = self
            .workouts
            .iter()
            .find(|workout| workout.id == workout_id)
            .cloned()
            .ok_or_else(|| ClientError::UnknownWorkout(workout_id.to_string()))?;

        let entry = PlanEntryView {
            id: Ulid::new().to_string(),
            workout,
            note: note.unwrap_or_default().to_string(),
        };

        self.plan_mut(day)?.section_mut(section).push(entry);
        self.persist(day).await
    }

    pub async fn remove_entry(
        &mut self,
        day: Weekday,
        section: PlanSection,
        entry_id: &str,
    ) -> ClientResult<&PlanView> {
        self.plan_mut(day)?
            .section_mut(section)
            .retain(|entry| entry.id != entry_id);
        self.persist(day).await
    }

    pub async fn edit_entry_note(
        &mut self,
        day: Weekday,
        section: PlanSection,
        entry_id: &str,
        note: &str,
    ) -> ClientResult<&PlanView> {
        let entry = self
            .plan_mut(day)?
            .section_mut(section)
            .iter_mut()
            .find(|entry| entry.id == entry_id)
            .ok_or_else(|| ClientError::EntryNotFound(entry_id.to_string()))?;
        entry.note = note.to_string();

        self.persist(day).await
    }

    /// Re-reads one day from the server, discarding any local divergence.
    pub async fn refresh(&mut self, day: Weekday) -> ClientResult<&PlanView> {
        let fresh = self.api.get_plan(day).await?;
        Ok(self.store(fresh))
    }

    pub async fn refresh_all(&mut self) -> ClientResult<()> {
        self.plans = self.api.list_plans().await?;
        Ok(())
    }

    pub async fn refresh_catalog(&mut self) -> ClientResult<()> {
        self.workouts = self.api.list_workouts().await?;
        Ok(())
    }

    /// Sends the cached day to the server as a full replacement and adopts
    /// the reconciled plan it returns.
    async fn persist(&mut self, day: Weekday) -> ClientResult<&PlanView> {
        let request = {
            let plan = self
                .plan(day)
                .ok_or_else(|| ClientError::PlanNotLoaded(day.to_string()))?;
            ReplacePlanRequest {
                warmup: entry_inputs(&plan.warmup),
                workouts: entry_inputs(&plan.workouts),
                cooldown: entry_inputs(&plan.cooldown),
                is_break_day: plan.is_break_day,
            }
        };

        let fresh = self.api.replace_plan(day, &request).await?;
        Ok(self.store(fresh))
    }

    fn plan_mut(&mut self, day: Weekday) -> ClientResult<&mut PlanView> {
        self.plans
            .iter_mut()
            .find(|plan| plan.day == day)
            .ok_or_else(|| ClientError::PlanNotLoaded(day.to_string()))
    }

    fn store(&mut self, fresh: PlanView) -> &PlanView {
        let index = match self.plans.iter().position(|plan| plan.day == fresh.day) {
            Some(index) => {
                self.plans[index] = fresh;
                index
            }
            None => {
                self.plans.push(fresh);
                self.plans.len() - 1
            }
        };
        &self.plans[index]
    }
}

fn entry_inputs(entries: &[PlanEntryView]) -> Vec<PlanEntryInput> {
    entries
        .iter()
        .map(|entry| PlanEntryInput {
            workout: Some(entry.workout.id.clone()),
            note: Some(entry.note.clone()),
        })
        .collect()
}
