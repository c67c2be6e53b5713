use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectQueryError;
use crate::modules::project::application::query_engine::ProjectFilter;
use crate::modules::project::domain::Project;
use crate::shared::sort::SortKey;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::Unavailable(msg) => GetProjectsError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// An empty result is a valid outcome, not an error.
    async fn execute(
        &self,
        filter: ProjectFilter,
        sort: SortKey,
    ) -> Result<Vec<Project>, GetProjectsError>;
}
