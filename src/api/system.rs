use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiResponse, AppState, SystemStatusDto};

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<SystemStatusDto>> {
    let status = SystemStatusDto {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        resume_count: state.shared.resumes.count().await,
        code_count: state.shared.codes.all().await.len(),
        active_sessions: state.shared.sessions.len().await,
    };
    Json(ApiResponse::success(status))
}
