use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{PlanError, PlanResult};

/// Day of the week a plan belongs to. Serialized lowercase everywhere: in
/// URLs, in stored rows and in response bodies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn parse(value: &str) -> PlanResult<Self> {
        Weekday::from_str(value).map_err(|_| PlanError::InvalidDay(value.to_string()))
    }

    /// The current weekday in UTC, used as the default selection for a
    /// freshly started planner session.
    pub fn today_utc() -> Self {
        match chrono::Utc::now().weekday() {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}
