use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactReceipt, SubmitContactInput,
};
use crate::modules::experience::application::experience_view::ExperienceView;
use crate::modules::experience::domain::Experience;
use crate::modules::project::adapter::incoming::web::routes::{
    CategoryOption, ProjectListResponse,
};
use crate::modules::project::domain::{Project, ProjectCategory, ProjectStatus};
use crate::modules::skill::domain::{Proficiency, Skill, SkillCategory};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only portfolio content: projects, experience timeline, skills and the contact form",
    ),
    paths(
        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_categories_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,

        // Experience endpoints
        crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler,
        crate::modules::experience::adapter::incoming::web::routes::get_single_experience_handler,

        // Skill endpoints
        crate::modules::skill::adapter::incoming::web::routes::get_skills_handler,
        crate::modules::skill::adapter::incoming::web::routes::get_single_skill_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Project DTOs
            Project,
            ProjectCategory,
            ProjectStatus,
            ProjectListResponse,
            CategoryOption,

            // Experience DTOs
            Experience,
            ExperienceView,

            // Skill DTOs
            Skill,
            SkillCategory,
            Proficiency,

            // Contact DTOs
            SubmitContactInput,
            ContactReceipt,
        )
    ),
    tags(
        (name = "projects", description = "Project gallery endpoints"),
        (name = "experiences", description = "Employment timeline endpoints"),
        (name = "skills", description = "Skill showcase endpoints"),
        (name = "contact", description = "Contact form endpoint"),
    )
)]
pub struct ApiDoc;
