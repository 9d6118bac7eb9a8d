use std::sync::Arc;

use crate::api::middleware::AppError;
use crate::models::{
    Application, ApplicationCreate, ApplicationUpdate, DeleteResponse, Environment, Namespace,
};
use crate::storage::ApplicationRepository;

/// Resource service for applications.
/// Each operation is a single repository call; errors are surfaced as-is.
#[derive(Clone)]
pub struct ApplicationService {
    repository: Arc<dyn ApplicationRepository>,
}

impl ApplicationService {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    /// List every stored application
    pub async fn list(&self) -> Result<Vec<Application>, AppError> {
        let apps = self.repository.get_all().await?;
        tracing::debug!("Listed {} applications", apps.len());
        Ok(apps)
    }

    /// Fetch one application by code
    pub async fn get(&self, appcode: &str) -> Result<Application, AppError> {
        self.repository
            .get(appcode)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("App not found: {}", appcode)))
    }

    /// Create a new application; a taken code is a conflict
    pub async fn create(&self, payload: ApplicationCreate) -> Result<Application, AppError> {
        let app = Application::from(payload);
        self.repository.insert(&app).await?;
        tracing::info!("Created application {}", app.appcode);
        Ok(app)
    }

    /// Replace every mutable field of an existing application
    pub async fn update(
        &self,
        appcode: &str,
        payload: ApplicationUpdate,
    ) -> Result<Application, AppError> {
        let app = self.repository.update(appcode, payload).await?;
        tracing::info!("Updated application {}", appcode);
        Ok(app)
    }

    /// Delete an existing application
    pub async fn delete(&self, appcode: &str) -> Result<DeleteResponse, AppError> {
        self.repository.delete(appcode).await?;
        tracing::info!("Deleted application {}", appcode);
        Ok(DeleteResponse::deleted())
    }

    pub fn list_environments(&self) -> Vec<Environment> {
        Environment::ALL.to_vec()
    }

    /// Namespaces are not stored yet, so `appcode` does not affect the result.
    pub fn list_namespaces(&self, appcode: &str) -> Vec<Namespace> {
        tracing::debug!("Serving placeholder namespaces for {}", appcode);
        Namespace::placeholders()
    }
}
