use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{self, AppState};
use crate::services::ApplicationService;
use crate::storage::ApplicationRepository;

/// Create router with application state
pub fn create_router_with_state(repository: Arc<dyn ApplicationRepository>) -> Router {
    let state = AppState {
        service: ApplicationService::new(repository),
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/apps", get(handlers::list_apps).post(handlers::create_app))
        .route(
            "/apps/{appcode}",
            get(handlers::get_app)
                .put(handlers::update_app)
                .delete(handlers::delete_app),
        )
        .route("/apps/{appcode}/namespaces", get(handlers::list_namespaces))
        .route("/environments", get(handlers::list_environments))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
