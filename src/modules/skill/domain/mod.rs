pub mod entities;

pub use entities::{Proficiency, ProficiencyError, Skill, SkillCategory};
