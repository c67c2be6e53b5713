use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::modules::experience::domain::{Experience, TenureCalculator};

/// An experience record plus its computed tenure string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ExperienceView {
    #[serde(flatten)]
    pub experience: Experience,
    /// `None` when the range cannot be measured (start after today).
    pub tenure: Option<String>,
}

impl ExperienceView {
    pub fn build(experience: Experience, calculator: &TenureCalculator) -> Self {
        let tenure = match calculator.duration(experience.start_date, experience.end_date) {
            Ok(tenure) => Some(tenure),
            Err(err) => {
                warn!("Cannot compute tenure for experience id={}: {}", experience.id, err);
                None
            }
        };

        Self { experience, tenure }
    }
}
