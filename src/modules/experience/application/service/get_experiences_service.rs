use async_trait::async_trait;

use crate::modules::experience::application::experience_view::ExperienceView;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::ExperienceQuery;
use crate::modules::experience::domain::TenureCalculator;
use crate::shared::sort::SortKey;

pub struct GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
    calculator: TenureCalculator,
}

impl<Q> GetExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q, calculator: TenureCalculator) -> Self {
        Self { query, calculator }
    }
}

#[async_trait]
impl<Q> GetExperiencesUseCase for GetExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self, sort: SortKey) -> Result<Vec<ExperienceView>, GetExperiencesError> {
        let experiences = self.query.list(&sort).await?;

        Ok(experiences
            .into_iter()
            .map(|experience| ExperienceView::build(experience, &self.calculator))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::{mock, predicate::*};
    use std::sync::Arc;

    use crate::modules::experience::application::ports::outgoing::ExperienceQueryError;
    use crate::modules::experience::domain::Experience;
    use crate::shared::clock::FixedClock;
    use crate::tests::support::fixtures::{current_experience, date, past_experience};

    mock! {
        pub ExperienceQueryMock {}
        #[async_trait]
        impl ExperienceQuery for ExperienceQueryMock {
            async fn list(&self, sort: &SortKey) -> Result<Vec<Experience>, ExperienceQueryError>;
            async fn get_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceQueryError>;
        }
    }

    fn calculator() -> TenureCalculator {
        TenureCalculator::new(Arc::new(FixedClock(date(2024, 1, 15))))
    }

    #[tokio::test]
    async fn execute_attaches_tenure_to_each_record() {
        let mut query = MockExperienceQueryMock::new();
        query
            .expect_list()
            .with(eq(SortKey::parse("-start_date")))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    current_experience("1", date(2022, 1, 15)),
                    past_experience("2", date(2020, 1, 1), date(2022, 1, 1)),
                ])
            });

        let service = GetExperiencesService::new(query, calculator());
        let result = service.execute(SortKey::parse("-start_date")).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].tenure.as_deref(), Some("1y 11m"));
        assert_eq!(result[1].tenure.as_deref(), Some("2y"));
    }

    #[tokio::test]
    async fn execute_leaves_tenure_empty_when_start_is_after_today() {
        let mut query = MockExperienceQueryMock::new();
        query
            .expect_list()
            .returning(|_| Ok(vec![current_experience("1", date(2025, 1, 1))]));

        let service = GetExperiencesService::new(query, calculator());
        let result = service.execute(SortKey::parse("")).await.unwrap();

        assert_eq!(result[0].tenure, None);
    }

    #[tokio::test]
    async fn execute_maps_query_error() {
        let mut query = MockExperienceQueryMock::new();
        query
            .expect_list()
            .returning(|_| Err(ExperienceQueryError::Unavailable("down".to_string())));

        let service = GetExperiencesService::new(query, calculator());
        let result = service.execute(SortKey::parse("")).await;

        assert!(matches!(result, Err(GetExperiencesError::QueryFailed(_))));
    }
}
