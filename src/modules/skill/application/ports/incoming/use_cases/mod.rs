mod get_single_skill;
mod get_skills;

pub use get_single_skill::{GetSingleSkillError, GetSingleSkillUseCase};
pub use get_skills::{GetSkillsError, GetSkillsUseCase};
