// src/modules/project/application/query_engine.rs

use crate::modules::project::domain::{Project, ProjectCategory};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
    /// A value that names no category. Exact matching keeps nothing.
    Unrecognized(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == ALL_CATEGORIES {
            return CategoryFilter::All;
        }

        match raw.parse::<ProjectCategory>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unrecognized(raw.to_string()),
        }
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => project.category == *category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }
}

/// Search text plus category, applied conjunctively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilter {
    search: String,
    category: CategoryFilter,
}

impl ProjectFilter {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into().to_lowercase(),
            category,
        }
    }

    pub fn from_raw(search: Option<&str>, category: Option<&str>) -> Self {
        Self::new(
            search.unwrap_or_default(),
            CategoryFilter::parse(category.unwrap_or_default()),
        )
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    fn matches_search(&self, project: &Project) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let term = self.search.as_str();
        project.title.to_lowercase().contains(term)
            || project.description.to_lowercase().contains(term)
            || project
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(term))
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_search(project) && self.category.matches(project)
    }

    /// Keeps the input order. Callers pass the full catalog each time,
    /// never a previously filtered result.
    pub fn apply(&self, catalog: &[Project]) -> Vec<Project> {
        catalog
            .iter()
            .filter(|project| self.matches(project))
            .cloned()
            .collect()
    }
}
