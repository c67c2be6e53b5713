use async_trait::async_trait;

use crate::modules::experience::application::experience_view::ExperienceView;
use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleExperienceError {
    #[error("Experience not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ExperienceQueryError> for GetSingleExperienceError {
    fn from(err: ExperienceQueryError) -> Self {
        match err {
            ExperienceQueryError::Unavailable(msg) => GetSingleExperienceError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSingleExperienceUseCase: Send + Sync {
    async fn execute(&self, experience_id: &str)
        -> Result<ExperienceView, GetSingleExperienceError>;
}
