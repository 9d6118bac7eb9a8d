use async_trait::async_trait;
use rusqlite::{Connection, ErrorCode, Result as SqliteResult};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{ApplicationRepository, StorageError, StorageResult};
use crate::models::{Application, ApplicationUpdate};

/// SQLite storage for application records
/// Uses tokio::Mutex for async-friendly locking; the connection is held
/// only for the duration of one statement.
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

/// Raw row as stored; `managergroups` is a JSON array in a TEXT column
struct StoredApplication {
    appcode: String,
    appname: String,
    description: Option<String>,
    managergroups: String,
    environment: String,
}

impl StoredApplication {
    fn from_row(row: &rusqlite::Row<'_>) -> SqliteResult<Self> {
        Ok(Self {
            appcode: row.get(0)?,
            appname: row.get(1)?,
            description: row.get(2)?,
            managergroups: row.get(3)?,
            environment: row.get(4)?,
        })
    }

    fn into_application(self) -> StorageResult<Application> {
        Ok(Application {
            appcode: self.appcode,
            appname: self.appname,
            description: self.description,
            managergroups: serde_json::from_str(&self.managergroups)?,
            environment: self.environment,
        })
    }
}

impl SqliteStorage {
    /// Open (or create) a SQLite database file
    pub async fn new<P: AsRef<Path>>(db_path: P) -> SqliteResult<Self> {
        // Handle SQLite URL format (sqlite:./path or sqlite://path)
        let path_str = db_path.as_ref().to_string_lossy();
        let clean_path: &str = if path_str.starts_with("sqlite:") {
            let mut cleaned = path_str.trim_start_matches("sqlite:");
            cleaned = cleaned.trim_start_matches("//");
            cleaned
        } else {
            path_str.as_ref()
        };

        let conn = Connection::open(clean_path)?;
        Self::from_connection(conn).await
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> SqliteResult<Self> {
        Self::from_connection(Connection::open_in_memory()?).await
    }

    async fn from_connection(conn: Connection) -> SqliteResult<Self> {
        let storage = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize database schema
    async fn init_schema(&self) -> SqliteResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS applications (
                appcode TEXT PRIMARY KEY NOT NULL,
                appname TEXT NOT NULL,
                description TEXT,
                managergroups TEXT NOT NULL DEFAULT '[]',
                environment TEXT NOT NULL
            )
            "#,
            [],
        )?;

        Ok(())
    }
}

#[async_trait]
impl ApplicationRepository for SqliteStorage {
    async fn get_all(&self) -> StorageResult<Vec<Application>> {
        let db_conn = self.conn.lock().await;
        let mut stmt = db_conn.prepare(
            "SELECT appcode, appname, description, managergroups, environment FROM applications ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], StoredApplication::from_row)?;

        let mut apps = Vec::new();
        for row in rows {
            apps.push(row?.into_application()?);
        }
        Ok(apps)
    }

    async fn get(&self, appcode: &str) -> StorageResult<Option<Application>> {
        let db_conn = self.conn.lock().await;
        let mut stmt = db_conn.prepare(
            "SELECT appcode, appname, description, managergroups, environment FROM applications WHERE appcode = ?1",
        )?;

        match stmt.query_row(rusqlite::params![appcode], StoredApplication::from_row) {
            Ok(stored) => Ok(Some(stored.into_application()?)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn insert(&self, app: &Application) -> StorageResult<()> {
        let managergroups = serde_json::to_string(&app.managergroups)?;

        let db_conn = self.conn.lock().await;
        let result = db_conn.execute(
            r#"
            INSERT INTO applications (appcode, appname, description, managergroups, environment)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            rusqlite::params![
                app.appcode,
                app.appname,
                app.description,
                managergroups,
                app.environment,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::ConstraintViolation => {
                Err(StorageError::Conflict(app.appcode.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, appcode: &str, fields: ApplicationUpdate) -> StorageResult<Application> {
        let app = fields.into_application(appcode);
        let managergroups = serde_json::to_string(&app.managergroups)?;

        let db_conn = self.conn.lock().await;
        let rows_affected = db_conn.execute(
            r#"
            UPDATE applications
            SET appname = ?1, description = ?2, managergroups = ?3, environment = ?4
            WHERE appcode = ?5
            "#,
            rusqlite::params![
                app.appname,
                app.description,
                managergroups,
                app.environment,
                app.appcode,
            ],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(appcode.to_string()));
        }
        Ok(app)
    }

    async fn delete(&self, appcode: &str) -> StorageResult<()> {
        let db_conn = self.conn.lock().await;
        let rows_affected = db_conn.execute(
            "DELETE FROM applications WHERE appcode = ?1",
            rusqlite::params![appcode],
        )?;

        if rows_affected == 0 {
            return Err(StorageError::NotFound(appcode.to_string()));
        }
        Ok(())
    }
}
