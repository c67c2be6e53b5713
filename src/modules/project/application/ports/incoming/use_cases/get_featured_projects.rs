use async_trait::async_trait;

use super::GetProjectsError;
use crate::modules::project::domain::Project;

#[async_trait]
pub trait GetFeaturedProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError>;
}
