use actix_web::web;
use std::sync::Arc;

use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::ports::incoming::use_cases::{
    GetExperiencesUseCase, GetSingleExperienceUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSingleSkillUseCase, GetSkillsUseCase,
};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::tests::support::stubs::{
    DefaultStubGetFeaturedProjectsUseCase, DefaultStubGetProjectsUseCase,
    DefaultStubGetSkillsUseCase, StubGetExperiencesUseCase, StubGetSingleExperienceUseCase,
    StubGetSingleProjectUseCase, StubGetSingleSkillUseCase, StubSubmitContactUseCase,
};
use crate::AppState;

/// Builds an `AppState` where every use case defaults to a harmless stub.
/// Tests override only the use cases they exercise.
pub struct TestAppStateBuilder {
    get_projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    get_single_project: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    get_featured_projects: Arc<dyn GetFeaturedProjectsUseCase + Send + Sync>,
    get_experiences: Arc<dyn GetExperiencesUseCase + Send + Sync>,
    get_single_experience: Arc<dyn GetSingleExperienceUseCase + Send + Sync>,
    get_skills: Arc<dyn GetSkillsUseCase + Send + Sync>,
    get_single_skill: Arc<dyn GetSingleSkillUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_projects: Arc::new(DefaultStubGetProjectsUseCase),
            get_single_project: Arc::new(StubGetSingleProjectUseCase::not_found()),
            get_featured_projects: Arc::new(DefaultStubGetFeaturedProjectsUseCase),
            get_experiences: Arc::new(StubGetExperiencesUseCase::empty()),
            get_single_experience: Arc::new(StubGetSingleExperienceUseCase),
            get_skills: Arc::new(DefaultStubGetSkillsUseCase),
            get_single_skill: Arc::new(StubGetSingleSkillUseCase),
            submit_contact: Arc::new(StubSubmitContactUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(
        mut self,
        use_case: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_projects = Arc::new(use_case);
        self
    }

    pub fn with_get_single_project(
        mut self,
        use_case: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_project = Arc::new(use_case);
        self
    }

    pub fn with_get_featured_projects(
        mut self,
        use_case: impl GetFeaturedProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_featured_projects = Arc::new(use_case);
        self
    }

    pub fn with_get_experiences(
        mut self,
        use_case: impl GetExperiencesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_experiences = Arc::new(use_case);
        self
    }

    pub fn with_get_single_experience(
        mut self,
        use_case: impl GetSingleExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_single_experience = Arc::new(use_case);
        self
    }

    pub fn with_get_skills(
        mut self,
        use_case: impl GetSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_skills = Arc::new(use_case);
        self
    }

    pub fn with_submit_contact(
        mut self,
        use_case: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: ProjectUseCases {
                get_list: self.get_projects,
                get_single: self.get_single_project,
                get_featured: self.get_featured_projects,
            },
            experience: ExperienceUseCases {
                get_list: self.get_experiences,
                get_single: self.get_single_experience,
            },
            skill: SkillUseCases {
                get_list: self.get_skills,
                get_single: self.get_single_skill,
            },
            contact: ContactUseCases {
                submit: self.submit_contact,
            },
        })
    }
}
