//! Résumé aggregate and its sub-records.
//!
//! Field names serialize as camelCase to stay compatible with the
//! collection layout the web client persisted.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: String,
    pub title: String,
    pub basic_info: BasicInfo,
    pub education: Vec<Education>,
    pub career: Vec<Career>,
    pub certificates: Vec<Certificate>,
    pub skills: Vec<Skill>,
    pub activities: Vec<Activity>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub phone_verified: bool,
    pub email_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub school: String,
    pub major: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: String,
    pub company: String,
    pub position: String,
    pub department: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub acquisition_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

/// Ordered wizard steps. The declaration order is the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResumeStep {
    Basic,
    Education,
    Career,
    Certificates,
    Skills,
    Activities,
}

impl ResumeStep {
    pub const ALL: [Self; 6] = [
        Self::Basic,
        Self::Education,
        Self::Career,
        Self::Certificates,
        Self::Skills,
        Self::Activities,
    ];

    /// Position of the step in the fixed navigation order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Basic => "기본정보",
            Self::Education => "학력",
            Self::Career => "경력",
            Self::Certificates => "자격증",
            Self::Skills => "기술",
            Self::Activities => "대외활동",
        }
    }
}

impl std::fmt::Display for ResumeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            Self::Basic => "basic",
            Self::Education => "education",
            Self::Career => "career",
            Self::Certificates => "certificates",
            Self::Skills => "skills",
            Self::Activities => "activities",
        };
        f.write_str(key)
    }
}

impl std::str::FromStr for ResumeStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "education" => Ok(Self::Education),
            "career" => Ok(Self::Career),
            "certificates" => Ok(Self::Certificates),
            "skills" => Ok(Self::Skills),
            "activities" => Ok(Self::Activities),
            other => Err(format!("Unknown resume step: {other}")),
        }
    }
}

impl Resume {
    /// A blank résumé with a fresh identifier and creation timestamps.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            basic_info: BasicInfo::default(),
            education: Vec::new(),
            career: Vec::new(),
            certificates: Vec::new(),
            skills: Vec::new(),
            activities: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Refresh the update timestamp. Called on every save.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().to_rfc3339();
    }

    /// Whether the step's associated data is non-empty. Used to seed the
    /// completed set when editing an existing résumé.
    #[must_use]
    pub fn step_has_data(&self, step: ResumeStep) -> bool {
        match step {
            ResumeStep::Basic => !self.title.is_empty() && !self.basic_info.name.is_empty(),
            ResumeStep::Education => !self.education.is_empty(),
            ResumeStep::Career => !self.career.is_empty(),
            ResumeStep::Certificates => !self.certificates.is_empty(),
            ResumeStep::Skills => !self.skills.is_empty(),
            ResumeStep::Activities => !self.activities.is_empty(),
        }
    }
}

impl Default for Resume {
    fn default() -> Self {
        Self::new()
    }
}
