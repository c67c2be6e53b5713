use actix_web::{get, web, Responder};
use tracing::error;

use super::ProjectListResponse;
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/featured",
    tag = "projects",
    responses(
        (status = 200, description = "Featured projects, newest first", body = ProjectListResponse)
    )
)]
#[get("/api/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_featured.execute().await {
        Ok(projects) => ApiResponse::success(ProjectListResponse::from(projects)),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list featured projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
