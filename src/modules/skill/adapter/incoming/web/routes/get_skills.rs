use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::skill::application::ports::incoming::use_cases::GetSkillsError;
use crate::modules::skill::domain::{Skill, SkillCategory};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetSkillsQuery {
    /// Exact skill category; omit for every skill
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "skills",
    params(GetSkillsQuery),
    responses(
        (status = 200, description = "Skills", body = [Skill]),
        (status = 400, description = "Unknown category", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(
    query: web::Query<GetSkillsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category = match query.into_inner().category.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<SkillCategory>() {
            Ok(category) => Some(category),
            Err(err) => return ApiResponse::bad_request("INVALID_CATEGORY", &err.to_string()),
        },
    };

    match data.skill.get_list.execute(category).await {
        Ok(skills) => ApiResponse::success(skills),

        Err(GetSkillsError::QueryFailed(msg)) => {
            error!("Failed to list skills: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
