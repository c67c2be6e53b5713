use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExperienceError {
    #[error("a past position needs an end date")]
    MissingEndDate,

    #[error("a current position cannot have an end date")]
    CurrentWithEndDate,

    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// One employment period. Exactly one of `end_date` / `is_current` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub id: String,
    pub position: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[schema(value_type = String, format = Date, example = "2022-01-15")]
    pub start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
}

impl Experience {
    pub fn validate(&self) -> Result<(), ExperienceError> {
        match (self.end_date, self.is_current) {
            (None, false) => Err(ExperienceError::MissingEndDate),
            (Some(_), true) => Err(ExperienceError::CurrentWithEndDate),
            (Some(end), false) if end < self.start_date => Err(ExperienceError::EndBeforeStart {
                start: self.start_date,
                end,
            }),
            _ => Ok(()),
        }
    }
}
