use serde::Serialize;

use crate::models::{Resume, ResumeStep};
use crate::services::VerificationStatus;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Compact row for the résumé list view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummaryDto {
    pub id: String,
    pub title: String,
    pub name: String,
    pub education_count: usize,
    pub career_count: usize,
    pub certificate_count: usize,
    pub skill_count: usize,
    pub activity_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Resume> for ResumeSummaryDto {
    fn from(resume: &Resume) -> Self {
        Self {
            id: resume.id.clone(),
            title: resume.title.clone(),
            name: resume.basic_info.name.clone(),
            education_count: resume.education.len(),
            career_count: resume.career.len(),
            certificate_count: resume.certificates.len(),
            skill_count: resume.skills.len(),
            activity_count: resume.activities.len(),
            created_at: resume.created_at.clone(),
            updated_at: resume.updated_at.clone(),
        }
    }
}

/// Full snapshot of an authoring session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardStateDto {
    pub session_id: String,
    pub current_step: ResumeStep,
    pub completed_steps: Vec<ResumeStep>,
    pub editing: bool,
    pub is_last_step: bool,
    pub phone_verification: VerificationStatus,
    pub email_verification: VerificationStatus,
    pub resume: Resume,
}

/// Result of a `goto` request; `moved` is false when the gating rule
/// refused the jump and the current step is unchanged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationDto {
    pub moved: bool,
    #[serde(flatten)]
    pub state: WizardStateDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatusDto {
    pub version: String,
    pub uptime_seconds: u64,
    pub resume_count: usize,
    pub code_count: usize,
    pub active_sessions: usize,
}
