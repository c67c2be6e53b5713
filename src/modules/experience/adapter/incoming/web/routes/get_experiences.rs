use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::experience::application::experience_view::ExperienceView;
use crate::modules::experience::application::ports::incoming::use_cases::GetExperiencesError;
use crate::shared::api::ApiResponse;
use crate::shared::sort::SortKey;
use crate::AppState;

const DEFAULT_EXPERIENCE_SORT: &str = "-start_date";

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetExperiencesQuery {
    /// `start_date` or `-start_date`
    pub sort: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "experiences",
    params(GetExperiencesQuery),
    responses(
        (status = 200, description = "Employment timeline", body = [ExperienceView]),
        (status = 500, description = "Catalog unavailable", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/experiences")]
pub async fn get_experiences_handler(
    query: web::Query<GetExperiencesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let sort = SortKey::parse(
        query
            .into_inner()
            .sort
            .as_deref()
            .unwrap_or(DEFAULT_EXPERIENCE_SORT),
    );

    match data.experience.get_list.execute(sort).await {
        Ok(experiences) => ApiResponse::success(experiences),

        Err(GetExperiencesError::QueryFailed(msg)) => {
            error!("Failed to list experiences: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
