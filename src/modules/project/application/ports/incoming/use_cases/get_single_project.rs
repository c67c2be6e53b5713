use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectQueryError;
use crate::modules::project::domain::Project;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetSingleProjectError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::Unavailable(msg) => GetSingleProjectError::QueryFailed(msg),
        }
    }
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: &str) -> Result<Project, GetSingleProjectError>;
}
