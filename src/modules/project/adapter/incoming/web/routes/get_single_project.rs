use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/projects/{project_id}",
    tag = "projects",
    params(("project_id" = String, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = Project),
        (status = 404, description = "No project with this id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/projects/{project_id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_single.execute(&project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::QueryFailed(msg)) => {
            error!("Failed to fetch project id={}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
