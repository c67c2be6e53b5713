use async_trait::async_trait;

use crate::modules::experience::application::experience_view::ExperienceView;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetSingleExperienceError, GetSingleExperienceUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::modules::experience::domain::TenureCalculator;

pub struct GetSingleExperienceService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
    calculator: TenureCalculator,
}

impl<Q> GetSingleExperienceService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q, calculator: TenureCalculator) -> Self {
        Self { query, calculator }
    }
}

#[async_trait]
impl<Q> GetSingleExperienceUseCase for GetSingleExperienceService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(
        &self,
        experience_id: &str,
    ) -> Result<ExperienceView, GetSingleExperienceError> {
        let experience = self
            .query
            .get_by_id(experience_id)
            .await?
            .ok_or(GetSingleExperienceError::NotFound)?;

        Ok(ExperienceView::build(experience, &self.calculator))
    }
}
