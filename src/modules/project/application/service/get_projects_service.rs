use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::project::application::query_engine::ProjectFilter;
use crate::modules::project::domain::Project;
use crate::shared::sort::SortKey;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectFilter,
        sort: SortKey,
    ) -> Result<Vec<Project>, GetProjectsError> {
        // Every request filters the full catalog.
        let catalog = self
            .query
            .list(&sort)
            .await
            .map_err(GetProjectsError::from)?;

        Ok(filter.apply(&catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::modules::project::application::ports::outgoing::ProjectQueryError;
    use crate::modules::project::application::query_engine::CategoryFilter;
    use crate::modules::project::domain::ProjectCategory;
    use crate::tests::support::fixtures::sample_project;

    /* --------------------------------------------------
     * Mock ProjectQuery
     * -------------------------------------------------- */

    #[derive(Clone)]
    struct MockProjectQuery {
        result: Result<Vec<Project>, ProjectQueryError>,
    }

    impl MockProjectQuery {
        fn success(projects: Vec<Project>) -> Self {
            Self {
                result: Ok(projects),
            }
        }

        fn error(err: ProjectQueryError) -> Self {
            Self { result: Err(err) }
        }
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn list(&self, _sort: &SortKey) -> Result<Vec<Project>, ProjectQueryError> {
            self.result.clone()
        }

        async fn get_by_id(&self, _id: &str) -> Result<Option<Project>, ProjectQueryError> {
            unimplemented!("not used in GetProjectsService tests")
        }
    }

    /* --------------------------------------------------
     * Tests
     * -------------------------------------------------- */

    #[tokio::test]
    async fn execute_returns_whole_catalog_without_filter() {
        let catalog = vec![
            sample_project("1", "Chat App", ProjectCategory::Web),
            sample_project("2", "Task API", ProjectCategory::Api),
        ];
        let service = GetProjectsService::new(MockProjectQuery::success(catalog.clone()));

        let result = service
            .execute(ProjectFilter::default(), SortKey::parse("-year"))
            .await
            .unwrap();

        assert_eq!(result, catalog);
    }

    #[tokio::test]
    async fn execute_applies_filter_to_catalog() {
        let catalog = vec![
            sample_project("1", "Chat App", ProjectCategory::Web),
            sample_project("2", "Task API", ProjectCategory::Api),
        ];
        let service = GetProjectsService::new(MockProjectQuery::success(catalog));

        let result = service
            .execute(
                ProjectFilter::new("", CategoryFilter::Only(ProjectCategory::Api)),
                SortKey::parse("-year"),
            )
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[tokio::test]
    async fn repeated_calls_do_not_compound_filters() {
        let catalog = vec![
            sample_project("1", "Chat App", ProjectCategory::Web),
            sample_project("2", "Task API", ProjectCategory::Api),
        ];
        let service = GetProjectsService::new(MockProjectQuery::success(catalog));

        let narrow = service
            .execute(ProjectFilter::from_raw(Some("chat"), None), SortKey::parse(""))
            .await
            .unwrap();
        assert_eq!(narrow.len(), 1);

        let wide = service
            .execute(ProjectFilter::default(), SortKey::parse(""))
            .await
            .unwrap();
        assert_eq!(wide.len(), 2);
    }

    #[tokio::test]
    async fn execute_maps_unavailable_error() {
        let service = GetProjectsService::new(MockProjectQuery::error(
            ProjectQueryError::Unavailable("store down".to_string()),
        ));

        let result = service
            .execute(ProjectFilter::default(), SortKey::parse("-year"))
            .await;

        assert!(matches!(result, Err(GetProjectsError::QueryFailed(_))));
    }
}
