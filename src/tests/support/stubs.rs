use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactError, SubmitContactInput, SubmitContactUseCase,
};
use crate::modules::experience::application::experience_view::ExperienceView;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesError, GetExperiencesUseCase, GetSingleExperienceError,
    GetSingleExperienceUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectsError, GetProjectsUseCase, GetSingleProjectError,
    GetSingleProjectUseCase,
};
use crate::modules::project::application::query_engine::ProjectFilter;
use crate::modules::project::domain::Project;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSingleSkillError, GetSingleSkillUseCase, GetSkillsError, GetSkillsUseCase,
};
use crate::modules::skill::domain::{Skill, SkillCategory};
use crate::shared::sort::SortKey;

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct DefaultStubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for DefaultStubGetProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectFilter,
        _sort: SortKey,
    ) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct DefaultStubGetFeaturedProjectsUseCase;

#[async_trait]
impl GetFeaturedProjectsUseCase for DefaultStubGetFeaturedProjectsUseCase {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase {
    result: Result<Project, GetSingleProjectError>,
}

impl StubGetSingleProjectUseCase {
    pub fn found(project: Project) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetSingleProjectError::NotFound),
        }
    }

    pub fn query_failed(msg: &str) -> Self {
        Self {
            result: Err(GetSingleProjectError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: &str) -> Result<Project, GetSingleProjectError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Experience
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubGetExperiencesUseCase {
    result: Result<Vec<ExperienceView>, GetExperiencesError>,
}

impl StubGetExperiencesUseCase {
    pub fn empty() -> Self {
        Self { result: Ok(vec![]) }
    }

    pub fn query_failed(msg: &str) -> Self {
        Self {
            result: Err(GetExperiencesError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetExperiencesUseCase for StubGetExperiencesUseCase {
    async fn execute(&self, _sort: SortKey) -> Result<Vec<ExperienceView>, GetExperiencesError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSingleExperienceUseCase;

#[async_trait]
impl GetSingleExperienceUseCase for StubGetSingleExperienceUseCase {
    async fn execute(
        &self,
        _experience_id: &str,
    ) -> Result<ExperienceView, GetSingleExperienceError> {
        Err(GetSingleExperienceError::NotFound)
    }
}

/* --------------------------------------------------
 * Skill
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct DefaultStubGetSkillsUseCase;

#[async_trait]
impl GetSkillsUseCase for DefaultStubGetSkillsUseCase {
    async fn execute(
        &self,
        _category: Option<SkillCategory>,
    ) -> Result<Vec<Skill>, GetSkillsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetSingleSkillUseCase;

#[async_trait]
impl GetSingleSkillUseCase for StubGetSingleSkillUseCase {
    async fn execute(&self, _skill_id: &str) -> Result<Skill, GetSingleSkillError> {
        Err(GetSingleSkillError::NotFound)
    }
}

/* --------------------------------------------------
 * Contact
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubSubmitContactUseCase;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _input: SubmitContactInput,
    ) -> Result<ContactReceipt, SubmitContactError> {
        Ok(ContactReceipt {
            submission_id: Uuid::nil(),
            received_at: Utc::now(),
        })
    }
}
