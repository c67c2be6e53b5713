// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::domain::Project;
use crate::shared::sort::SortKey;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only catalog)
// ──────────────────────────────────────────────────────────
//

/// Async so a network-backed store can replace the in-memory one
/// without touching callers.
#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Whole catalog. Only `year` is honoured as a sort field; anything
    /// else returns catalog order.
    async fn list(&self, sort: &SortKey) -> Result<Vec<Project>, ProjectQueryError>;

    /// `Ok(None)` when no project has this id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Project>, ProjectQueryError>;
}
