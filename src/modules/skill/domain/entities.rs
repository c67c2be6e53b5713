use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Backend,
    Frontend,
    Database,
    Devops,
    Tools,
    Cloud,
    Framework,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Backend,
        SkillCategory::Frontend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Tools,
        SkillCategory::Cloud,
        SkillCategory::Framework,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Backend => "backend",
            SkillCategory::Frontend => "frontend",
            SkillCategory::Database => "database",
            SkillCategory::Devops => "devops",
            SkillCategory::Tools => "tools",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Framework => "framework",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown skill category: {0}")]
pub struct UnknownSkillCategory(pub String);

impl FromStr for SkillCategory {
    type Err = UnknownSkillCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownSkillCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProficiencyError {
    #[error("proficiency must be between 1 and 100, got {0}")]
    OutOfRange(u8),
}

/// Rating in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u8", into = "u8")]
#[schema(value_type = u8)]
pub struct Proficiency(u8);

impl Proficiency {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = ProficiencyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=100).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ProficiencyError::OutOfRange(value))
        }
    }
}

impl From<Proficiency> for u8 {
    fn from(p: Proficiency) -> Self {
        p.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    #[schema(value_type = u8, minimum = 1, maximum = 100)]
    pub proficiency: Proficiency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
    /// Display token chosen by the author, e.g. `bg-orange-500`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_count: Option<u32>,
    /// Icon identifier for the client's icon set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_bounds() {
        assert!(Proficiency::try_from(0).is_err());
        assert_eq!(Proficiency::try_from(1).unwrap().value(), 1);
        assert_eq!(Proficiency::try_from(100).unwrap().value(), 100);
        assert_eq!(
            Proficiency::try_from(101),
            Err(ProficiencyError::OutOfRange(101))
        );
    }

    #[test]
    fn proficiency_deserialization_is_validated() {
        assert!(serde_json::from_str::<Proficiency>("95").is_ok());
        assert!(serde_json::from_str::<Proficiency>("0").is_err());
    }

    #[test]
    fn category_parsing_is_exact() {
        assert_eq!("devops".parse::<SkillCategory>(), Ok(SkillCategory::Devops));
        assert!("DevOps".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn icon_name_is_optional() {
        let skill: Skill = serde_json::from_value(serde_json::json!({
            "id": "1",
            "name": "Java",
            "category": "backend",
            "proficiency": 95
        }))
        .unwrap();
        assert_eq!(skill.icon_name, None);
        assert!(serde_json::to_value(&skill).unwrap().get("icon_name").is_none());

        let with_icon = Skill {
            icon_name: Some("coffee".to_string()),
            ..skill
        };
        assert_eq!(serde_json::to_value(&with_icon).unwrap()["icon_name"], "coffee");
    }
}
