use async_trait::async_trait;

use crate::modules::skill::domain::{Skill, SkillCategory};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SkillQueryError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SkillQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, SkillQueryError>;

    async fn get_by_category(
        &self,
        category: SkillCategory,
    ) -> Result<Vec<Skill>, SkillQueryError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Skill>, SkillQueryError>;
}
