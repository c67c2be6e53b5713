use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectsError,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::project::domain::Project;
use crate::shared::sort::SortKey;

const FEATURED_SORT: &str = "-year";

pub struct GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFeaturedProjectsUseCase for GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        let projects = self.query.list(&SortKey::parse(FEATURED_SORT)).await?;

        Ok(projects.into_iter().filter(|p| p.featured).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::modules::project::adapter::outgoing::InMemoryProjectCatalog;
    use crate::modules::project::domain::ProjectCategory;
    use crate::tests::support::fixtures::sample_project;

    #[tokio::test]
    async fn execute_keeps_only_featured_newest_first() {
        let mut old = sample_project("1", "Old", ProjectCategory::Web);
        old.year = Some(2020);
        old.featured = true;

        let mut plain = sample_project("2", "Plain", ProjectCategory::Api);
        plain.year = Some(2024);

        let mut new = sample_project("3", "New", ProjectCategory::Enterprise);
        new.year = Some(2023);
        new.featured = true;

        let catalog = InMemoryProjectCatalog::new(vec![old, plain, new]).unwrap();
        let service = GetFeaturedProjectsService::new(catalog);

        let result = service.execute().await.unwrap();
        let ids: Vec<_> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }
}
