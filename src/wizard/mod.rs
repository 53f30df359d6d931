//! Multi-step authoring sessions.
//!
//! A `WizardSession` exclusively owns one in-progress résumé, the
//! current step, and the set of completed steps. Forward navigation is
//! gated: a step is reachable only if it is at or before the current
//! position, or already completed.

pub mod forms;
pub mod registry;

pub use registry::SessionRegistry;

pub use forms::{
    BasicInfoUpdate, NewActivity, NewCareer, NewCertificate, NewEducation, NewSkill,
};

use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Resume, ResumeStep};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("The basic info step cannot be skipped")]
    BasicRequired,

    #[error("Step {0} is not reachable yet")]
    StepNotReachable(ResumeStep),
}

#[derive(Debug, Clone)]
pub struct WizardSession {
    id: String,
    resume: Resume,
    current: ResumeStep,
    completed: BTreeSet<ResumeStep>,
    editing: bool,
}

impl WizardSession {
    /// Start authoring a new résumé from the first step.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            resume: Resume::new(),
            current: ResumeStep::Basic,
            completed: BTreeSet::new(),
            editing: false,
        }
    }

    /// Re-open an existing résumé. The completed set is seeded once from
    /// data presence; it is session state from here on, so clearing a
    /// step's data later does not retroactively un-complete it.
    #[must_use]
    pub fn edit(resume: Resume) -> Self {
        let completed = ResumeStep::ALL
            .into_iter()
            .filter(|step| resume.step_has_data(*step))
            .collect();
        Self {
            id: Uuid::new_v4().to_string(),
            resume,
            current: ResumeStep::Basic,
            completed,
            editing: true,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn resume(&self) -> &Resume {
        &self.resume
    }

    #[must_use]
    pub const fn current(&self) -> ResumeStep {
        self.current
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub fn completed(&self) -> Vec<ResumeStep> {
        self.completed.iter().copied().collect()
    }

    #[must_use]
    pub fn is_complete(&self, step: ResumeStep) -> bool {
        self.completed.contains(&step)
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current.index() == ResumeStep::ALL.len() - 1
    }

    /// Jump to a step. Honored only when the target is at or before the
    /// current position, or already completed; otherwise the current
    /// step is unchanged and `false` is returned.
    pub fn go_to(&mut self, step: ResumeStep) -> bool {
        if step.index() <= self.current.index() || self.completed.contains(&step) {
            self.current = step;
            true
        } else {
            false
        }
    }

    /// Advance one step, clamped at the last step.
    pub fn next(&mut self) -> ResumeStep {
        let index = self.current.index();
        if index + 1 < ResumeStep::ALL.len() {
            self.current = ResumeStep::ALL[index + 1];
        }
        self.current
    }

    /// Go back one step, clamped at the first step.
    pub fn previous(&mut self) -> ResumeStep {
        let index = self.current.index();
        if index > 0 {
            self.current = ResumeStep::ALL[index - 1];
        }
        self.current
    }

    /// Idempotent: marking an already-completed step changes nothing.
    pub fn mark_complete(&mut self, step: ResumeStep) {
        self.completed.insert(step);
    }

    /// Mark a step complete without any entries. Every step except
    /// basic info is optional.
    pub fn skip(&mut self, step: ResumeStep) -> Result<(), WizardError> {
        if step == ResumeStep::Basic {
            return Err(WizardError::BasicRequired);
        }
        self.mark_complete(step);
        Ok(())
    }

    // Basic info step

    /// Merge the fields present in the update into the aggregate.
    pub fn update_basic_info(&mut self, update: BasicInfoUpdate) {
        if let Some(title) = update.title {
            self.resume.title = title;
        }
        let info = &mut self.resume.basic_info;
        if let Some(name) = update.name {
            info.name = name;
        }
        if let Some(phone) = update.phone {
            info.phone = phone;
        }
        if let Some(email) = update.email {
            info.email = email;
        }
        if let Some(address) = update.address {
            info.address = address;
        }
    }

    /// Validate the required basic-info fields and mark the step
    /// complete. Reports the first missing field.
    pub fn complete_basic_info(&mut self) -> Result<(), WizardError> {
        let checks: [(&'static str, &str); 5] = [
            ("title", &self.resume.title),
            ("name", &self.resume.basic_info.name),
            ("phone", &self.resume.basic_info.phone),
            ("email", &self.resume.basic_info.email),
            ("address", &self.resume.basic_info.address),
        ];
        for (field, value) in checks {
            if value.trim().is_empty() {
                return Err(WizardError::MissingField(field));
            }
        }
        self.mark_complete(ResumeStep::Basic);
        Ok(())
    }

    /// Flip a verification flag. Flags only ever move false → true.
    pub fn mark_verified(&mut self, kind: VerificationKind) {
        match kind {
            VerificationKind::Phone => self.resume.basic_info.phone_verified = true,
            VerificationKind::Email => self.resume.basic_info.email_verified = true,
        }
    }

    // Sub-list steps: add validates the draft, assigns an id, appends
    // and marks the step complete; remove is a silent no-op when the
    // id is absent.

    pub fn add_education(&mut self, draft: NewEducation) -> Result<(), WizardError> {
        let entry = draft.into_entry()?;
        self.resume.education.push(entry);
        self.mark_complete(ResumeStep::Education);
        Ok(())
    }

    pub fn remove_education(&mut self, id: &str) {
        self.resume.education.retain(|e| e.id != id);
    }

    pub fn add_career(&mut self, draft: NewCareer) -> Result<(), WizardError> {
        let entry = draft.into_entry()?;
        self.resume.career.push(entry);
        self.mark_complete(ResumeStep::Career);
        Ok(())
    }

    pub fn remove_career(&mut self, id: &str) {
        self.resume.career.retain(|c| c.id != id);
    }

    pub fn add_certificate(&mut self, draft: NewCertificate) -> Result<(), WizardError> {
        let entry = draft.into_entry()?;
        self.resume.certificates.push(entry);
        self.mark_complete(ResumeStep::Certificates);
        Ok(())
    }

    pub fn remove_certificate(&mut self, id: &str) {
        self.resume.certificates.retain(|c| c.id != id);
    }

    pub fn add_skill(&mut self, draft: NewSkill) -> Result<(), WizardError> {
        let entry = draft.into_entry()?;
        self.resume.skills.push(entry);
        self.mark_complete(ResumeStep::Skills);
        Ok(())
    }

    pub fn remove_skill(&mut self, id: &str) {
        self.resume.skills.retain(|s| s.id != id);
    }

    pub fn add_activity(&mut self, draft: NewActivity) -> Result<(), WizardError> {
        let entry = draft.into_entry()?;
        self.resume.activities.push(entry);
        self.mark_complete(ResumeStep::Activities);
        Ok(())
    }

    pub fn remove_activity(&mut self, id: &str) {
        self.resume.activities.retain(|a| a.id != id);
    }

    /// Stamp a fresh update timestamp and hand back the finished résumé
    /// for the repository to persist.
    #[must_use]
    pub fn finish(mut self) -> Resume {
        self.resume.touch();
        self.resume
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Which contact detail the verification collaborator should confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationKind {
    Phone,
    Email,
}

impl std::fmt::Display for VerificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Phone => f.write_str("phone"),
            Self::Email => f.write_str("email"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillLevel;

    fn education() -> NewEducation {
        NewEducation {
            school: "서울대학교".to_string(),
            major: "컴퓨터공학".to_string(),
            degree: "학사".to_string(),
            start_date: "2016-03".to_string(),
            end_date: "2020-02".to_string(),
            gpa: None,
        }
    }

    #[test]
    fn forward_jump_to_uncompleted_step_is_refused() {
        let mut session = WizardSession::new();
        assert!(!session.go_to(ResumeStep::Career));
        assert_eq!(session.current(), ResumeStep::Basic);
    }

    #[test]
    fn completed_step_is_reachable_from_anywhere() {
        let mut session = WizardSession::new();
        session.mark_complete(ResumeStep::Skills);
        assert!(session.go_to(ResumeStep::Skills));
        assert_eq!(session.current(), ResumeStep::Skills);

        // Backwards is always allowed.
        assert!(session.go_to(ResumeStep::Basic));
    }

    #[test]
    fn next_and_previous_clamp_at_both_ends() {
        let mut session = WizardSession::new();
        assert_eq!(session.previous(), ResumeStep::Basic);

        for _ in 0..10 {
            session.next();
        }
        assert_eq!(session.current(), ResumeStep::Activities);
    }

    #[test]
    fn mark_complete_is_idempotent() {
        let mut session = WizardSession::new();
        session.mark_complete(ResumeStep::Education);
        session.mark_complete(ResumeStep::Education);
        assert_eq!(session.completed(), vec![ResumeStep::Education]);
    }

    #[test]
    fn basic_step_cannot_be_skipped() {
        let mut session = WizardSession::new();
        assert!(matches!(
            session.skip(ResumeStep::Basic),
            Err(WizardError::BasicRequired)
        ));
        assert!(session.skip(ResumeStep::Career).is_ok());
    }

    #[test]
    fn complete_basic_reports_first_missing_field() {
        let mut session = WizardSession::new();
        session.update_basic_info(BasicInfoUpdate {
            title: Some("Frontend Engineer Resume".to_string()),
            name: Some("Kim".to_string()),
            ..BasicInfoUpdate::default()
        });

        let err = session.complete_basic_info().unwrap_err();
        assert!(matches!(err, WizardError::MissingField("phone")));
        assert!(!session.is_complete(ResumeStep::Basic));
    }

    #[test]
    fn basic_only_flow_leaves_sub_lists_empty() {
        let mut session = WizardSession::new();
        session.update_basic_info(BasicInfoUpdate {
            title: Some("Frontend Engineer Resume".to_string()),
            name: Some("Kim".to_string()),
            phone: Some("010-1234-5678".to_string()),
            email: Some("kim@example.com".to_string()),
            address: Some("서울시 강남구".to_string()),
        });
        session.complete_basic_info().unwrap();
        assert_eq!(session.completed(), vec![ResumeStep::Basic]);

        let resume = session.finish();
        assert_eq!(resume.title, "Frontend Engineer Resume");
        assert!(resume.education.is_empty());
        assert!(resume.career.is_empty());
        assert!(resume.certificates.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.activities.is_empty());
    }

    #[test]
    fn add_two_entries_remove_first_keeps_second_in_order() {
        let mut session = WizardSession::new();
        session.add_education(education()).unwrap();
        let mut second = education();
        second.school = "연세대학교".to_string();
        session.add_education(second).unwrap();

        let first_id = session.resume().education[0].id.clone();
        session.remove_education(&first_id);

        let remaining = &session.resume().education;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].school, "연세대학교");
    }

    #[test]
    fn remove_absent_entry_is_noop() {
        let mut session = WizardSession::new();
        session.add_education(education()).unwrap();
        session.remove_education("missing");
        assert_eq!(session.resume().education.len(), 1);
    }

    #[test]
    fn add_marks_step_complete() {
        let mut session = WizardSession::new();
        session
            .add_skill(NewSkill {
                name: "Rust".to_string(),
                level: SkillLevel::Expert,
                category: "Backend".to_string(),
            })
            .unwrap();
        assert!(session.is_complete(ResumeStep::Skills));
        assert!(session.go_to(ResumeStep::Skills));
    }

    #[test]
    fn edit_seeds_completed_from_data_presence() {
        let mut resume = Resume::new();
        resume.title = "Backend Engineer Resume".to_string();
        resume.basic_info.name = "Lee".to_string();
        resume.career.push(crate::models::Career {
            id: "c1".to_string(),
            company: "회사".to_string(),
            position: "대리".to_string(),
            department: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            description: String::new(),
        });

        let session = WizardSession::edit(resume);
        assert!(session.is_complete(ResumeStep::Basic));
        assert!(session.is_complete(ResumeStep::Career));
        assert!(!session.is_complete(ResumeStep::Education));
    }

    #[test]
    fn edit_completion_survives_clearing_data() {
        let mut resume = Resume::new();
        resume.title = "T".to_string();
        resume.basic_info.name = "N".to_string();
        resume.education.push(crate::models::Education {
            id: "e1".to_string(),
            school: "학교".to_string(),
            major: "전공".to_string(),
            degree: "학사".to_string(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
        });

        let mut session = WizardSession::edit(resume);
        session.remove_education("e1");
        assert!(session.resume().education.is_empty());
        assert!(session.is_complete(ResumeStep::Education));
    }

    #[test]
    fn finish_refreshes_update_timestamp() {
        let mut session = WizardSession::new();
        let created = session.resume().created_at.clone();
        session.update_basic_info(BasicInfoUpdate {
            title: Some("T".to_string()),
            ..BasicInfoUpdate::default()
        });

        std::thread::sleep(std::time::Duration::from_millis(5));
        let resume = session.finish();
        assert_eq!(resume.created_at, created);
        assert!(resume.updated_at >= created);
    }

    #[test]
    fn verification_flags_only_go_true() {
        let mut session = WizardSession::new();
        session.mark_verified(VerificationKind::Phone);
        assert!(session.resume().basic_info.phone_verified);
        assert!(!session.resume().basic_info.email_verified);
    }
}
