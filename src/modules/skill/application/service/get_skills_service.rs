use async_trait::async_trait;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillsError, GetSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::modules::skill::domain::{Skill, SkillCategory};

pub struct GetSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(
        &self,
        category: Option<SkillCategory>,
    ) -> Result<Vec<Skill>, GetSkillsError> {
        let skills = match category {
            Some(category) => self.query.get_by_category(category).await?,
            None => self.query.list().await?,
        };

        Ok(skills)
    }
}
