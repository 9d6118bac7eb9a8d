use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::handlers::AppState;
use crate::models::{Environment, Namespace};

/// List the environments applications can target
pub async fn list_environments(State(state): State<AppState>) -> Json<Vec<Environment>> {
    Json(state.service.list_environments())
}

/// List namespaces for an application (static data)
pub async fn list_namespaces(
    State(state): State<AppState>,
    Path(appcode): Path<String>,
) -> Json<Vec<Namespace>> {
    Json(state.service.list_namespaces(&appcode))
}
