use async_trait::async_trait;

use crate::modules::skill::application::ports::outgoing::SkillQueryError;
use crate::modules::skill::domain::{Skill, SkillCategory};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for GetSkillsError {
    fn from(err: SkillQueryError) -> Self {
        match err {
            SkillQueryError::Unavailable(msg) => GetSkillsError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    /// `None` lists every skill.
    async fn execute(&self, category: Option<SkillCategory>)
        -> Result<Vec<Skill>, GetSkillsError>;
}
