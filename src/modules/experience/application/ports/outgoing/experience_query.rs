use async_trait::async_trait;

use crate::modules::experience::domain::Experience;
use crate::shared::sort::SortKey;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    /// Honours `start_date` / `-start_date`; other fields keep catalog order.
    async fn list(&self, sort: &SortKey) -> Result<Vec<Experience>, ExperienceQueryError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceQueryError>;
}
