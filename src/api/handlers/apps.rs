use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::handlers::AppState;
use crate::api::middleware::AppError;
use crate::models::{Application, ApplicationCreate, ApplicationUpdate, DeleteResponse};
use crate::validation::ValidatedJson;

/// List all applications
pub async fn list_apps(State(state): State<AppState>) -> Result<Json<Vec<Application>>, AppError> {
    let apps = state.service.list().await?;
    Ok(Json(apps))
}

/// Get an application by code
pub async fn get_app(
    State(state): State<AppState>,
    Path(appcode): Path<String>,
) -> Result<Json<Application>, AppError> {
    let app = state.service.get(&appcode).await?;
    Ok(Json(app))
}

/// Create a new application
pub async fn create_app(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ApplicationCreate>,
) -> Result<Json<Application>, AppError> {
    let app = state.service.create(payload).await?;
    Ok(Json(app))
}

/// Replace an existing application
pub async fn update_app(
    State(state): State<AppState>,
    Path(appcode): Path<String>,
    ValidatedJson(payload): ValidatedJson<ApplicationUpdate>,
) -> Result<Json<Application>, AppError> {
    let app = state.service.update(&appcode, payload).await?;
    Ok(Json(app))
}

/// Delete an application
pub async fn delete_app(
    State(state): State<AppState>,
    Path(appcode): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let ack = state.service.delete(&appcode).await?;
    Ok(Json(ack))
}
