//! Per-step draft payloads and their required-field validation.
//!
//! Each step form collects one draft entry at a time; a successful add
//! assigns a fresh id and appends it to the résumé's sub-list. Required
//! fields only get a non-empty check; formats are not validated.

use serde::Deserialize;
use uuid::Uuid;

use super::WizardError;
use crate::models::{Activity, Career, Certificate, Education, Skill, SkillLevel};

fn require(field: &'static str, value: &str) -> Result<(), WizardError> {
    if value.trim().is_empty() {
        Err(WizardError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Field-wise merge of the basic-info step. Only present fields change,
/// so one keystroke updates one field without touching the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfoUpdate {
    pub title: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEducation {
    pub school: String,
    pub major: String,
    pub degree: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
}

impl NewEducation {
    pub fn into_entry(self) -> Result<Education, WizardError> {
        require("school", &self.school)?;
        require("major", &self.major)?;
        require("degree", &self.degree)?;
        Ok(Education {
            id: Uuid::new_v4().to_string(),
            school: self.school,
            major: self.major,
            degree: self.degree,
            start_date: self.start_date,
            end_date: self.end_date,
            gpa: self.gpa.filter(|g| !g.is_empty()),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCareer {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl NewCareer {
    pub fn into_entry(self) -> Result<Career, WizardError> {
        require("company", &self.company)?;
        require("position", &self.position)?;
        Ok(Career {
            id: Uuid::new_v4().to_string(),
            company: self.company,
            position: self.position,
            department: self.department,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCertificate {
    pub name: String,
    pub organization: String,
    #[serde(default)]
    pub acquisition_date: String,
    #[serde(default)]
    pub expiration_date: Option<String>,
}

impl NewCertificate {
    pub fn into_entry(self) -> Result<Certificate, WizardError> {
        require("name", &self.name)?;
        require("organization", &self.organization)?;
        require("acquisitionDate", &self.acquisition_date)?;
        Ok(Certificate {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            organization: self.organization,
            acquisition_date: self.acquisition_date,
            expiration_date: self.expiration_date.filter(|d| !d.is_empty()),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    #[serde(default)]
    pub level: SkillLevel,
    pub category: String,
}

impl NewSkill {
    pub fn into_entry(self) -> Result<Skill, WizardError> {
        require("name", &self.name)?;
        require("category", &self.category)?;
        Ok(Skill {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            level: self.level,
            category: self.category,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub name: String,
    pub organization: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
}

impl NewActivity {
    pub fn into_entry(self) -> Result<Activity, WizardError> {
        require("name", &self.name)?;
        require("organization", &self.organization)?;
        Ok(Activity {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            organization: self.organization,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_requires_school_major_degree() {
        let draft = NewEducation {
            school: "서울대학교".to_string(),
            major: String::new(),
            degree: "학사".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
        };
        let err = draft.into_entry().unwrap_err();
        assert!(matches!(err, WizardError::MissingField("major")));
    }

    #[test]
    fn valid_draft_gets_a_fresh_id() {
        let draft = NewSkill {
            name: "Rust".to_string(),
            level: SkillLevel::Advanced,
            category: "Backend".to_string(),
        };
        let skill = draft.into_entry().unwrap();
        assert!(!skill.id.is_empty());
        assert_eq!(skill.level, SkillLevel::Advanced);
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let draft = NewActivity {
            name: "  ".to_string(),
            organization: "동아리".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        };
        assert!(draft.into_entry().is_err());
    }
}
