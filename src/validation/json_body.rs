use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::api::middleware::AppError;

/// JSON body extractor that only checks structure: required fields must
/// be present with the declared types. Every rejection becomes
/// `AppError::Validation` (422) before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                AppError::Validation(rejection.body_text())
            })?;

        Ok(Self(value))
    }
}
