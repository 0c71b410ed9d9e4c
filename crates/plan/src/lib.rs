pub mod day;
pub mod error;
pub mod model;
pub mod repository;

pub use day::Weekday;
pub use error::{InvalidEntry, PlanError, PlanResult};
pub use model::{
    AttachedEntry, PlanEntryInput, PlanEntryView, PlanSection, PlanView, ReplacePlanRequest,
};
