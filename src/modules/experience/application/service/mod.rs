mod get_experiences_service;
mod get_single_experience_service;

pub use get_experiences_service::GetExperiencesService;
pub use get_single_experience_service::GetSingleExperienceService;
