mod get_single_skill;
mod get_skills;

pub use get_single_skill::*;
pub use get_skills::*;
