use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::experience::application::experience_view::ExperienceView;
use crate::modules::experience::application::ports::incoming::use_cases::GetSingleExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/experiences/{experience_id}",
    tag = "experiences",
    params(("experience_id" = String, Path, description = "Experience id")),
    responses(
        (status = 200, description = "Experience found", body = ExperienceView),
        (status = 404, description = "No experience with this id", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/experiences/{experience_id}")]
pub async fn get_single_experience_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let experience_id = path.into_inner();

    match data.experience.get_single.execute(&experience_id).await {
        Ok(experience) => ApiResponse::success(experience),

        Err(GetSingleExperienceError::NotFound) => {
            ApiResponse::not_found("EXPERIENCE_NOT_FOUND", "Experience not found")
        }

        Err(GetSingleExperienceError::QueryFailed(msg)) => {
            error!("Failed to fetch experience id={}: {}", experience_id, msg);
            ApiResponse::internal_error()
        }
    }
}
