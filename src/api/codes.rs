//! Admin handlers for the common-code reference tables.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::domain::events::NotificationEvent;
use crate::models::{CodeCategory, CommonCode};

#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<CodeCategory>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCodeRequest {
    pub category: CodeCategory,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCodeRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// Admin view: every code, inactive ones included.
pub async fn list_codes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Json<ApiResponse<Vec<CommonCode>>> {
    let codes = match query.category {
        Some(category) => state.shared.codes.by_category(category).await,
        None => state.shared.codes.all().await,
    };
    Json(ApiResponse::success(codes))
}

/// Dropdown view: active codes of one category, in display order.
pub async fn list_active_codes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Json<ApiResponse<Vec<CommonCode>>>, ApiError> {
    let category = query
        .category
        .ok_or_else(|| ApiError::validation("Query parameter 'category' is required"))?;
    let codes = state.shared.codes.active_by_category(category).await;
    Ok(Json(ApiResponse::success(codes)))
}

pub async fn create_code(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCodeRequest>,
) -> Result<Json<ApiResponse<CommonCode>>, ApiError> {
    if payload.value.trim().is_empty() {
        return Err(ApiError::validation("Code value cannot be empty"));
    }

    let code = state
        .shared
        .codes
        .add(payload.category, payload.value)
        .await?;
    Ok(Json(ApiResponse::success(code)))
}

pub async fn update_code(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateCodeRequest>,
) -> Result<Json<ApiResponse<CommonCode>>, ApiError> {
    if payload.value.trim().is_empty() {
        return Err(ApiError::validation("Code value cannot be empty"));
    }

    let code = state.shared.codes.update_value(&id, payload.value).await?;
    Ok(Json(ApiResponse::success(code)))
}

pub async fn set_code_active(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SetActiveRequest>,
) -> Result<Json<ApiResponse<CommonCode>>, ApiError> {
    let code = state
        .shared
        .codes
        .set_active(&id, payload.is_active)
        .await?;
    Ok(Json(ApiResponse::success(code)))
}

pub async fn delete_code(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.shared.codes.remove(&id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// Restore the built-in default code set.
pub async fn reseed_codes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CommonCode>>>, ApiError> {
    let count = state.shared.codes.reseed().await?;
    let _ = state
        .shared
        .event_bus
        .send(NotificationEvent::CodesReseeded { count });
    Ok(Json(ApiResponse::success(state.shared.codes.all().await)))
}
