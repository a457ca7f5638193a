//! Shared per-server state and the per-request service factory.
//!
//! # Invariants
//! - No connection or service instance is shared between requests.
//! - SQLite work never runs on an async worker thread.

use crate::error::ApiError;
use actix_web::web;
use std::path::PathBuf;
use student_core::db::open_db;
use student_core::{RepoError, ServiceResult, SqliteStudentRepository, StudentService};

/// Service type handed to request closures.
pub type SqliteStudentService<'conn> = StudentService<SqliteStudentRepository<'conn>>;

#[derive(Debug, Clone)]
pub struct AppState {
    db_path: PathBuf,
}

impl AppState {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Opens a fresh connection, wires repository and service, and runs `f`.
    ///
    /// Blocking; call from a blocking context.
    pub fn with_student_service<T>(
        &self,
        f: impl FnOnce(&SqliteStudentService<'_>) -> ServiceResult<T>,
    ) -> ServiceResult<T> {
        let conn = open_db(&self.db_path).map_err(RepoError::from)?;
        let service = StudentService::new(SqliteStudentRepository::new(&conn));
        f(&service)
    }

    /// Runs `f` against a fresh service on the blocking thread pool.
    pub async fn run<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteStudentService<'_>) -> ServiceResult<T> + Send + 'static,
    {
        let state = self.clone();
        let result = web::block(move || state.with_student_service(f))
            .await
            .map_err(|err| ApiError::Internal(format!("blocking task failed: {err}")))?;
        Ok(result?)
    }
}
