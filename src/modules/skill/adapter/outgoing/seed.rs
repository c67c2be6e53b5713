//! Skill ratings served by the in-memory catalog.

use crate::modules::skill::domain::{Proficiency, ProficiencyError, Skill, SkillCategory};

type SkillRow = (&'static str, &'static str, SkillCategory, u8, u32, &'static str, u32);

const SKILLS: [SkillRow; 20] = [
    ("1", "Java", SkillCategory::Backend, 95, 5, "bg-orange-500", 15),
    ("2", "Spring Boot", SkillCategory::Framework, 90, 4, "bg-green-500", 12),
    ("3", "Spring Security", SkillCategory::Framework, 85, 3, "bg-green-600", 8),
    ("4", "JPA/Hibernate", SkillCategory::Framework, 88, 4, "bg-orange-600", 10),
    ("5", "Maven/Gradle", SkillCategory::Tools, 80, 4, "bg-blue-500", 15),
    ("6", "React", SkillCategory::Frontend, 88, 3, "bg-cyan-500", 8),
    ("7", "TypeScript", SkillCategory::Frontend, 85, 2, "bg-blue-600", 6),
    ("8", "JavaScript", SkillCategory::Frontend, 90, 4, "bg-yellow-500", 12),
    ("9", "HTML/CSS", SkillCategory::Frontend, 92, 5, "bg-orange-400", 15),
    ("10", "Tailwind CSS", SkillCategory::Frontend, 85, 2, "bg-teal-500", 5),
    ("11", "PostgreSQL", SkillCategory::Database, 90, 4, "bg-blue-700", 10),
    ("12", "MySQL", SkillCategory::Database, 85, 3, "bg-orange-700", 8),
    ("13", "MongoDB", SkillCategory::Database, 80, 2, "bg-green-700", 4),
    ("14", "Redis", SkillCategory::Database, 75, 2, "bg-red-600", 3),
    ("15", "H2", SkillCategory::Database, 85, 3, "bg-indigo-500", 6),
    ("16", "AWS", SkillCategory::Cloud, 85, 3, "bg-orange-500", 8),
    ("17", "Docker", SkillCategory::Devops, 88, 3, "bg-blue-600", 10),
    ("18", "Kubernetes", SkillCategory::Devops, 75, 2, "bg-blue-700", 4),
    ("19", "Jenkins", SkillCategory::Devops, 80, 2, "bg-gray-600", 5),
    ("20", "GitLab CI/CD", SkillCategory::Devops, 82, 2, "bg-orange-600", 6),
];

pub fn skill_set() -> Result<Vec<Skill>, ProficiencyError> {
    SKILLS
        .iter()
        .map(|&(id, name, category, proficiency, years, color, projects)| {
            Ok(Skill {
                id: id.to_string(),
                name: name.to_string(),
                category,
                proficiency: Proficiency::try_from(proficiency)?,
                years_experience: Some(years),
                color: Some(color.to_string()),
                projects_count: Some(projects),
                icon_name: None,
            })
        })
        .collect()
}
