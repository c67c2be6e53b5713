pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::contact::adapter::outgoing::LoggingContactInbox;
use crate::modules::contact::application::contact_use_cases::ContactUseCases;
use crate::modules::contact::application::service::SubmitContactService;
use crate::modules::experience::adapter::outgoing::{seed::career_history, InMemoryExperienceCatalog};
use crate::modules::experience::application::experience_use_cases::ExperienceUseCases;
use crate::modules::experience::application::service::{
    GetExperiencesService, GetSingleExperienceService,
};
use crate::modules::experience::domain::TenureCalculator;
use crate::modules::project::adapter::outgoing::{seed::portfolio_projects, InMemoryProjectCatalog};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    GetFeaturedProjectsService, GetProjectsService, GetSingleProjectService,
};
use crate::modules::skill::adapter::outgoing::{seed::skill_set, InMemorySkillCatalog};
use crate::modules::skill::application::service::{GetSingleSkillService, GetSkillsService};
use crate::modules::skill::application::skill_use_cases::SkillUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};
use crate::shared::clock::SystemClock;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub experience: ExperienceUseCases,
    pub skill: SkillUseCases,
    pub contact: ContactUseCases,
}

/// Catalogs are built once here and shared read-only for the process lifetime.
fn build_state() -> anyhow::Result<AppState> {
    let projects =
        InMemoryProjectCatalog::new(portfolio_projects()).context("invalid project catalog")?;
    let experiences = InMemoryExperienceCatalog::new(career_history())
        .context("invalid experience catalog")?;
    let skills = InMemorySkillCatalog::new(skill_set().context("invalid skill rating")?)
        .context("invalid skill catalog")?;

    info!(
        projects = projects.len(),
        experiences = experiences.len(),
        skills = skills.len(),
        "Catalogs loaded"
    );

    let tenure = TenureCalculator::new(Arc::new(SystemClock));

    Ok(AppState {
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(projects.clone())),
            get_single: Arc::new(GetSingleProjectService::new(projects.clone())),
            get_featured: Arc::new(GetFeaturedProjectsService::new(projects)),
        },
        experience: ExperienceUseCases {
            get_list: Arc::new(GetExperiencesService::new(
                experiences.clone(),
                tenure.clone(),
            )),
            get_single: Arc::new(GetSingleExperienceService::new(experiences, tenure)),
        },
        skill: SkillUseCases {
            get_list: Arc::new(GetSkillsService::new(skills.clone())),
            get_single: Arc::new(GetSingleSkillService::new(skills)),
        },
        contact: ContactUseCases {
            submit: Arc::new(SubmitContactService::new(LoggingContactInbox)),
        },
    })
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application in {} mode...", config.environment);

    let state = build_state()?;
    let server_url = config.server_url();
    let serve_docs = !config.is_production();

    info!("Listening on {}", server_url);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .configure(init_routes);

        if serve_docs {
            app = app.service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            );
        }

        app
    })
    .bind(&server_url)
    .with_context(|| format!("failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{contact, experience, project, skill};

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects (fixed segments before the id route)
    cfg.service(project::adapter::incoming::web::routes::get_featured_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_project_categories_handler);
    cfg.service(project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(project::adapter::incoming::web::routes::get_single_project_handler);
    // Experiences
    cfg.service(experience::adapter::incoming::web::routes::get_experiences_handler);
    cfg.service(experience::adapter::incoming::web::routes::get_single_experience_handler);
    // Skills
    cfg.service(skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(skill::adapter::incoming::web::routes::get_single_skill_handler);
    // Contact
    cfg.service(contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
