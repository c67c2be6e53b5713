use async_trait::async_trait;

use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSingleSkillError, GetSingleSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;
use crate::modules::skill::domain::Skill;

pub struct GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSingleSkillService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleSkillUseCase for GetSingleSkillService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self, skill_id: &str) -> Result<Skill, GetSingleSkillError> {
        self.query
            .get_by_id(skill_id)
            .await?
            .ok_or(GetSingleSkillError::NotFound)
    }
}
