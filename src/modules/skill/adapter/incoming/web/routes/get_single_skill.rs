use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::skill::application::ports::incoming::use_cases::GetSingleSkillError;
use crate::modules::skill::domain::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/skills/{skill_id}",
    tag = "skills",
    params(("skill_id" = String, Path, description = "Skill id")),
    responses(
        (status = 200, description = "Skill found", body = Skill),
        (status = 404, description = "No skill with this id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/skills/{skill_id}")]
pub async fn get_single_skill_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let skill_id = path.into_inner();

    match data.skill.get_single.execute(&skill_id).await {
        Ok(skill) => ApiResponse::success(skill),

        Err(GetSingleSkillError::NotFound) => {
            ApiResponse::not_found("SKILL_NOT_FOUND", "Skill not found")
        }

        Err(GetSingleSkillError::QueryFailed(msg)) => {
            error!("Failed to fetch skill id={}: {}", skill_id, msg);
            ApiResponse::internal_error()
        }
    }
}
