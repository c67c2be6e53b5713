use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::experience::application::ports::outgoing::{
    ExperienceQuery, ExperienceQueryError,
};
use crate::modules::experience::domain::Experience;
use crate::shared::catalog::{ensure_unique_ids, CatalogError};
use crate::shared::sort::SortKey;

const START_DATE_FIELD: &str = "start_date";

#[derive(Clone)]
pub struct InMemoryExperienceCatalog {
    experiences: Arc<Vec<Experience>>,
}

impl InMemoryExperienceCatalog {
    /// Rejects duplicate ids and records breaking the end-date rules.
    pub fn new(experiences: Vec<Experience>) -> Result<Self, CatalogError> {
        ensure_unique_ids(experiences.iter().map(|e| e.id.as_str()))?;

        for experience in &experiences {
            experience
                .validate()
                .map_err(|err| CatalogError::InvalidRecord {
                    id: experience.id.clone(),
                    reason: err.to_string(),
                })?;
        }

        Ok(Self {
            experiences: Arc::new(experiences),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.experiences.len()
    }
}

#[async_trait]
impl ExperienceQuery for InMemoryExperienceCatalog {
    async fn list(&self, sort: &SortKey) -> Result<Vec<Experience>, ExperienceQueryError> {
        let mut experiences = self.experiences.as_ref().clone();

        if sort.is_field(START_DATE_FIELD) {
            sort.apply_by(&mut experiences, |e| e.start_date);
        }

        Ok(experiences)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Experience>, ExperienceQueryError> {
        Ok(self.experiences.iter().find(|e| e.id == id).cloned())
    }
}
