// src/modules/project/adapter/outgoing/project_catalog_in_memory.rs

use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectQueryError};
use crate::modules::project::domain::Project;
use crate::shared::catalog::{ensure_unique_ids, ensure_unique_titles, CatalogError};
use crate::shared::sort::SortKey;

const YEAR_FIELD: &str = "year";

// ============================================================================
// Repository Implementation
// ============================================================================

/// Built once at startup and never mutated. Clones share the same records.
#[derive(Clone)]
pub struct InMemoryProjectCatalog {
    projects: Arc<Vec<Project>>,
}

impl InMemoryProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        ensure_unique_ids(projects.iter().map(|p| p.id.as_str()))?;
        ensure_unique_titles(projects.iter().map(|p| p.title.as_str()))?;

        Ok(Self {
            projects: Arc::new(projects),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.projects.len()
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjectCatalog {
    async fn list(&self, sort: &SortKey) -> Result<Vec<Project>, ProjectQueryError> {
        let mut projects = self.projects.as_ref().clone();

        if sort.is_field(YEAR_FIELD) {
            sort.apply_by(&mut projects, |p| p.year);
        }

        Ok(projects)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Project>, ProjectQueryError> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }
}
