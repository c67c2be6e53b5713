use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::modules::project::domain::Project;

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: &str) -> Result<Project, GetSingleProjectError> {
        self.query
            .get_by_id(project_id)
            .await?
            .ok_or(GetSingleProjectError::NotFound)
    }
}
