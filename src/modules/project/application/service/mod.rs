mod get_featured_projects_service;
mod get_projects_service;
mod get_single_project_service;

pub use get_featured_projects_service::GetFeaturedProjectsService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
