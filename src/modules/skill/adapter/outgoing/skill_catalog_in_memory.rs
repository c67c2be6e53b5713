use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};
use crate::modules::skill::domain::{Skill, SkillCategory};
use crate::shared::catalog::{ensure_unique_ids, CatalogError};

#[derive(Clone)]
pub struct InMemorySkillCatalog {
    skills: Arc<Vec<Skill>>,
}

impl InMemorySkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Result<Self, CatalogError> {
        ensure_unique_ids(skills.iter().map(|s| s.id.as_str()))?;

        Ok(Self {
            skills: Arc::new(skills),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.skills.len()
    }
}

#[async_trait]
impl SkillQuery for InMemorySkillCatalog {
    async fn list(&self) -> Result<Vec<Skill>, SkillQueryError> {
        Ok(self.skills.as_ref().clone())
    }

    async fn get_by_category(
        &self,
        category: SkillCategory,
    ) -> Result<Vec<Skill>, SkillQueryError> {
        Ok(self
            .skills
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Skill>, SkillQueryError> {
        Ok(self.skills.iter().find(|s| s.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::adapter::outgoing::seed::skill_set;

    fn catalog() -> InMemorySkillCatalog {
        InMemorySkillCatalog::new(skill_set().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let skills = catalog().list().await.unwrap();
        assert_eq!(skills.len(), 20);
        assert_eq!(skills[0].name, "Java");
        assert_eq!(skills[19].name, "GitLab CI/CD");
    }

    #[tokio::test]
    async fn get_by_category_filters_exactly() {
        let catalog = catalog();
        let devops = catalog.get_by_category(SkillCategory::Devops).await.unwrap();

        assert_eq!(devops.len(), 4);
        assert!(devops.iter().all(|s| s.category == SkillCategory::Devops));

        let mut total = 0;
        for category in SkillCategory::ALL {
            total += catalog.get_by_category(category).await.unwrap().len();
        }
        assert_eq!(total, catalog.len());
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_id() {
        assert_eq!(catalog().get_by_id("0").await.unwrap(), None);
    }
}
