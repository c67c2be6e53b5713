use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::query_engine::ProjectFilter;
use crate::modules::project::domain::Project;
use crate::shared::api::ApiResponse;
use crate::shared::sort::SortKey;
use crate::AppState;

const DEFAULT_PROJECT_SORT: &str = "-year";

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetProjectsQuery {
    /// Case-insensitive substring of title, description or a technology
    pub search: Option<String>,
    /// Exact category value, or `all`
    pub category: Option<String>,
    /// `year` or `-year`; other fields keep catalog order
    pub sort: Option<String>,
}

impl From<GetProjectsQuery> for (ProjectFilter, SortKey) {
    fn from(q: GetProjectsQuery) -> Self {
        let filter = ProjectFilter::from_raw(q.search.as_deref(), q.category.as_deref());
        let sort = SortKey::parse(q.sort.as_deref().unwrap_or(DEFAULT_PROJECT_SORT));

        (filter, sort)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub items: Vec<Project>,
    pub total: usize,
}

impl From<Vec<Project>> for ProjectListResponse {
    fn from(items: Vec<Project>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Filtered projects", body = ProjectListResponse),
        (status = 500, description = "Catalog unavailable", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, sort) = query.into_inner().into();

    match data.project.get_list.execute(filter, sort).await {
        Ok(projects) => ApiResponse::success(ProjectListResponse::from(projects)),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
