mod get_single_skill_service;
mod get_skills_service;

pub use get_single_skill_service::GetSingleSkillService;
pub use get_skills_service::GetSkillsService;
