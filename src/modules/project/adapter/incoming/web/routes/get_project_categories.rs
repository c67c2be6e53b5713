use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::project::application::query_engine::ALL_CATEGORIES;
use crate::modules::project::domain::ProjectCategory;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// Filter options offered to the gallery, `all` first.
pub fn category_options() -> Vec<CategoryOption> {
    let listed = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Api,
        ProjectCategory::Enterprise,
        ProjectCategory::Microservice,
    ];

    std::iter::once(CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: "All Projects".to_string(),
    })
    .chain(listed.into_iter().map(|category| CategoryOption {
        value: category.as_str().to_string(),
        label: category_label(category).to_string(),
    }))
    .collect()
}

fn category_label(category: ProjectCategory) -> &'static str {
    match category {
        ProjectCategory::Web => "Web Applications",
        ProjectCategory::Mobile => "Mobile Apps",
        ProjectCategory::Desktop => "Desktop Applications",
        ProjectCategory::Api => "APIs & Services",
        ProjectCategory::Microservice => "Microservices",
        ProjectCategory::Enterprise => "Enterprise Solutions",
    }
}

#[utoipa::path(
    get,
    path = "/api/projects/categories",
    tag = "projects",
    responses(
        (status = 200, description = "Category filter options", body = [CategoryOption])
    )
)]
#[get("/api/projects/categories")]
pub async fn get_project_categories_handler() -> impl Responder {
    ApiResponse::success(category_options())
}
