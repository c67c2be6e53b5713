use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillQueryError;
use crate::modules::skill::domain::Skill;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleSkillError {
    #[error("Skill not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for GetSingleSkillError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::Unavailable(msg) => GetSingleSkillError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSingleSkillUseCase: Send + Sync {
    async fn execute(&self, skill_id: &str) -> Result<Skill, GetSingleSkillError>;
}
