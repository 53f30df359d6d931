use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

mod codes;
mod error;
mod events;
mod resumes;
mod system;
mod types;
mod wizard;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,

    pub start_time: std::time::Instant,
}

pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState {
        shared,
        start_time: std::time::Instant::now(),
    })
}

pub fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config)?);
    Ok(create_app_state(shared))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.shared.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/resumes", get(resumes::list_resumes))
        .route("/resumes/{id}", get(resumes::get_resume))
        .route("/resumes/{id}", delete(resumes::delete_resume))
        .route("/wizard", post(wizard::create_session))
        .route("/wizard/{sid}", get(wizard::get_session))
        .route("/wizard/{sid}/goto", post(wizard::go_to_step))
        .route("/wizard/{sid}/next", post(wizard::next_step))
        .route("/wizard/{sid}/previous", post(wizard::previous_step))
        .route("/wizard/{sid}/basic", put(wizard::update_basic_info))
        .route("/wizard/{sid}/basic/complete", post(wizard::complete_basic_info))
        .route("/wizard/{sid}/verify", post(wizard::request_verification))
        .route("/wizard/{sid}/{step}/entries", post(wizard::add_entry))
        .route(
            "/wizard/{sid}/{step}/entries/{entry_id}",
            delete(wizard::remove_entry),
        )
        .route("/wizard/{sid}/{step}/skip", post(wizard::skip_step))
        .route("/wizard/{sid}/finish", post(wizard::finish))
        .route("/codes", get(codes::list_codes))
        .route("/codes", post(codes::create_code))
        .route("/codes/active", get(codes::list_active_codes))
        .route("/codes/seed", post(codes::reseed_codes))
        .route("/codes/{id}", put(codes::update_code))
        .route("/codes/{id}", delete(codes::delete_code))
        .route("/codes/{id}/active", put(codes::set_code_active))
        .route("/events", get(events::sse_handler))
        .route("/system/status", get(system::get_status))
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
