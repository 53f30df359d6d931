use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, ResumeSummaryDto};
use crate::domain::events::NotificationEvent;
use crate::models::Resume;

pub async fn list_resumes(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<ResumeSummaryDto>>> {
    let resumes = state.shared.resumes.list().await;
    let dtos = resumes.iter().map(ResumeSummaryDto::from).collect();
    Json(ApiResponse::success(dtos))
}

pub async fn get_resume(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Resume>>, ApiError> {
    let resume = state
        .shared
        .resumes
        .get(&id)
        .await
        .ok_or_else(|| ApiError::resume_not_found(&id))?;
    Ok(Json(ApiResponse::success(resume)))
}

/// Delete by id. Deleting an unknown id is a no-op, so the response is
/// success either way; the event fires only when something was removed.
pub async fn delete_resume(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let existed = state.shared.resumes.get(&id).await.is_some();
    state.shared.resumes.remove(&id).await?;

    if existed {
        let _ = state
            .shared
            .event_bus
            .send(NotificationEvent::ResumeDeleted { id });
    }

    Ok(Json(ApiResponse::success(())))
}
