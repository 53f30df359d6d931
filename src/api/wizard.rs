//! Handlers driving wizard sessions: navigation, per-step form edits,
//! verification requests and the final save.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, NavigationDto, WizardStateDto};
use crate::domain::events::NotificationEvent;
use crate::models::{Resume, ResumeStep};
use crate::wizard::{
    BasicInfoUpdate, NewActivity, NewCareer, NewCertificate, NewEducation, NewSkill,
    VerificationKind, WizardSession,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// When present, open the existing résumé for editing.
    pub resume_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GoToRequest {
    pub step: ResumeStep,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub kind: VerificationKind,
}

async fn state_dto(state: &AppState, session: &WizardSession) -> WizardStateDto {
    let verification = &state.shared.verification;
    WizardStateDto {
        session_id: session.id().to_string(),
        current_step: session.current(),
        completed_steps: session.completed(),
        editing: session.is_editing(),
        is_last_step: session.is_last_step(),
        phone_verification: verification
            .status(session.id(), VerificationKind::Phone)
            .await,
        email_verification: verification
            .status(session.id(), VerificationKind::Email)
            .await,
        resume: session.resume().clone(),
    }
}

async fn session_or_404(state: &AppState, sid: &str) -> Result<WizardSession, ApiError> {
    state
        .shared
        .sessions
        .get(sid)
        .await
        .ok_or_else(|| ApiError::session_not_found(sid))
}

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    let session = match payload.resume_id {
        Some(resume_id) => {
            let resume = state
                .shared
                .resumes
                .get(&resume_id)
                .await
                .ok_or_else(|| ApiError::resume_not_found(&resume_id))?;
            WizardSession::edit(resume)
        }
        None => WizardSession::new(),
    };

    let dto = state_dto(&state, &session).await;
    state.shared.sessions.insert(session).await;
    Ok(Json(ApiResponse::success(dto)))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

pub async fn go_to_step(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
    Json(payload): Json<GoToRequest>,
) -> Result<Json<ApiResponse<NavigationDto>>, ApiError> {
    let moved = state
        .shared
        .sessions
        .update(&sid, |s| s.go_to(payload.step))
        .await
        .ok_or_else(|| ApiError::session_not_found(&sid))?;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(NavigationDto {
        moved,
        state: state_dto(&state, &session).await,
    })))
}

pub async fn next_step(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    state
        .shared
        .sessions
        .update(&sid, |s| {
            s.next();
        })
        .await
        .ok_or_else(|| ApiError::session_not_found(&sid))?;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

pub async fn previous_step(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    state
        .shared
        .sessions
        .update(&sid, |s| {
            s.previous();
        })
        .await
        .ok_or_else(|| ApiError::session_not_found(&sid))?;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

pub async fn update_basic_info(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
    Json(payload): Json<BasicInfoUpdate>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    state
        .shared
        .sessions
        .update(&sid, |s| s.update_basic_info(payload))
        .await
        .ok_or_else(|| ApiError::session_not_found(&sid))?;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

pub async fn complete_basic_info(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    state
        .shared
        .sessions
        .update(&sid, WizardSession::complete_basic_info)
        .await
        .ok_or_else(|| ApiError::session_not_found(&sid))??;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

/// Add one validated draft entry to the step's sub-list. The payload
/// shape depends on the step; the basic step has no sub-list.
pub async fn add_entry(
    State(state): State<Arc<AppState>>,
    Path((sid, step)): Path<(String, ResumeStep)>,
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    let parse = |e: serde_json::Error| ApiError::validation(e.to_string());

    let result = match step {
        ResumeStep::Basic => {
            return Err(ApiError::validation(
                "The basic info step has no list entries",
            ));
        }
        ResumeStep::Education => {
            let draft: NewEducation = serde_json::from_value(payload).map_err(parse)?;
            state
                .shared
                .sessions
                .update(&sid, |s| s.add_education(draft))
                .await
        }
        ResumeStep::Career => {
            let draft: NewCareer = serde_json::from_value(payload).map_err(parse)?;
            state
                .shared
                .sessions
                .update(&sid, |s| s.add_career(draft))
                .await
        }
        ResumeStep::Certificates => {
            let draft: NewCertificate = serde_json::from_value(payload).map_err(parse)?;
            state
                .shared
                .sessions
                .update(&sid, |s| s.add_certificate(draft))
                .await
        }
        ResumeStep::Skills => {
            let draft: NewSkill = serde_json::from_value(payload).map_err(parse)?;
            state
                .shared
                .sessions
                .update(&sid, |s| s.add_skill(draft))
                .await
        }
        ResumeStep::Activities => {
            let draft: NewActivity = serde_json::from_value(payload).map_err(parse)?;
            state
                .shared
                .sessions
                .update(&sid, |s| s.add_activity(draft))
                .await
        }
    };

    result.ok_or_else(|| ApiError::session_not_found(&sid))??;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

/// Remove an entry by id. Removal has no confirmation prompt and is a
/// silent no-op when the id is absent.
pub async fn remove_entry(
    State(state): State<Arc<AppState>>,
    Path((sid, step, entry_id)): Path<(String, ResumeStep, String)>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    state
        .shared
        .sessions
        .update(&sid, |s| match step {
            ResumeStep::Basic => {}
            ResumeStep::Education => s.remove_education(&entry_id),
            ResumeStep::Career => s.remove_career(&entry_id),
            ResumeStep::Certificates => s.remove_certificate(&entry_id),
            ResumeStep::Skills => s.remove_skill(&entry_id),
            ResumeStep::Activities => s.remove_activity(&entry_id),
        })
        .await
        .ok_or_else(|| ApiError::session_not_found(&sid))?;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

pub async fn skip_step(
    State(state): State<Arc<AppState>>,
    Path((sid, step)): Path<(String, ResumeStep)>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    state
        .shared
        .sessions
        .update(&sid, |s| s.skip(step))
        .await
        .ok_or_else(|| ApiError::session_not_found(&sid))??;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

pub async fn request_verification(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
    Json(payload): Json<VerifyRequest>,
) -> Result<Json<ApiResponse<WizardStateDto>>, ApiError> {
    // Validate the session first so a typo'd id fails fast.
    session_or_404(&state, &sid).await?;
    state.shared.verification.request(&sid, payload.kind).await;

    let session = session_or_404(&state, &sid).await?;
    Ok(Json(ApiResponse::success(state_dto(&state, &session).await)))
}

/// Persist the finished résumé and end the session.
pub async fn finish(
    State(state): State<Arc<AppState>>,
    Path(sid): Path<String>,
) -> Result<Json<ApiResponse<Resume>>, ApiError> {
    let session = state
        .shared
        .sessions
        .take(&sid)
        .await
        .ok_or_else(|| ApiError::session_not_found(&sid))?;

    let updated = session.is_editing();
    let resume = session.finish();

    if updated {
        state.shared.resumes.update(resume.clone()).await?;
    } else {
        state.shared.resumes.add(resume.clone()).await?;
    }

    let _ = state.shared.event_bus.send(NotificationEvent::ResumeSaved {
        id: resume.id.clone(),
        title: resume.title.clone(),
        updated,
    });

    Ok(Json(ApiResponse::success(resume)))
}
