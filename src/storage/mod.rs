pub mod sqlite;

pub use sqlite::SqliteStorage;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Application, ApplicationUpdate};

/// Storage layer errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Application with code {0} already exists")]
    Conflict(String),

    #[error("Application with code {0} not found")]
    NotFound(String),

    #[error("SQLite error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid stored manager groups: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Keyed storage of application records.
/// Each call is a single statement against the backend.
#[async_trait]
pub trait ApplicationRepository: Send + Sync + 'static {
    /// All records in insertion order
    async fn get_all(&self) -> StorageResult<Vec<Application>>;

    /// Point lookup by code
    async fn get(&self, appcode: &str) -> StorageResult<Option<Application>>;

    /// Insert a new record, failing with `Conflict` if the code is taken
    async fn insert(&self, app: &Application) -> StorageResult<()>;

    /// Replace every mutable field of an existing record
    async fn update(&self, appcode: &str, fields: ApplicationUpdate) -> StorageResult<Application>;

    /// Remove a record, failing with `NotFound` if absent
    async fn delete(&self, appcode: &str) -> StorageResult<()>;
}
