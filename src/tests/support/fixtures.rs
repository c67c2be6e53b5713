use chrono::NaiveDate;

use crate::modules::experience::domain::Experience;
use crate::modules::project::domain::{Project, ProjectCategory, ProjectStatus};
use crate::modules::skill::domain::{Proficiency, Skill, SkillCategory};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn sample_project(id: &str, title: &str, category: ProjectCategory) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        detailed_description: None,
        technologies: vec!["Rust".to_string()],
        category,
        status: ProjectStatus::Completed,
        image_url: None,
        demo_url: None,
        github_url: None,
        year: None,
        client: None,
        duration: None,
        team_size: None,
        featured: false,
    }
}

pub fn current_experience(id: &str, start: NaiveDate) -> Experience {
    Experience {
        id: id.to_string(),
        position: "Engineer".to_string(),
        company: "Acme".to_string(),
        location: None,
        start_date: start,
        end_date: None,
        is_current: true,
        description: "Building things".to_string(),
        achievements: None,
        technologies: None,
    }
}

pub fn past_experience(id: &str, start: NaiveDate, end: NaiveDate) -> Experience {
    Experience {
        end_date: Some(end),
        is_current: false,
        ..current_experience(id, start)
    }
}

pub fn sample_skill(id: &str, name: &str, category: SkillCategory, proficiency: u8) -> Skill {
    Skill {
        id: id.to_string(),
        name: name.to_string(),
        category,
        proficiency: Proficiency::try_from(proficiency).expect("valid test proficiency"),
        years_experience: None,
        color: None,
        projects_count: None,
        icon_name: None,
    }
}
