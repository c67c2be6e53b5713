use async_trait::async_trait;

use crate::modules::experience::application::experience_view::ExperienceView;
use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;
use crate::shared::sort::SortKey;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperiencesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ExperienceQueryError> for GetExperiencesError {
    fn from(err: ExperienceQueryError) -> Self {
        match err {
            ExperienceQueryError::Unavailable(msg) => GetExperiencesError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    async fn execute(&self, sort: SortKey) -> Result<Vec<ExperienceView>, GetExperiencesError>;
}
