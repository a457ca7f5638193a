//! Student use-case service.
//!
//! # Responsibility
//! - Enforce email uniqueness on create and existence on delete.
//! - Translate rule violations into domain errors.
//!
//! # Invariants
//! - Service layer remains storage-agnostic.
//! - A rejected create or delete never reaches the repository write path.
//! - Check and act are separate repository calls; they are not atomic.

use crate::model::student::{NewStudent, Student, StudentId};
use crate::repo::student_repo::{RepoError, StudentRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for student use-cases.
#[derive(Debug)]
pub enum StudentServiceError {
    /// Another student already uses this email.
    EmailTaken(String),
    /// Target student does not exist.
    StudentNotFound(StudentId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StudentServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailTaken(email) => write!(f, "Email {email} taken"),
            Self::StudentNotFound(id) => write!(f, "Student with id {id} does not exists"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StudentServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for StudentServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::StudentNotFound(id),
            other => Self::Repo(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, StudentServiceError>;

/// Student service facade over repository implementations.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all students exactly as storage returns them.
    pub fn get_all_students(&self) -> ServiceResult<Vec<Student>> {
        Ok(self.repo.find_all()?)
    }

    /// Creates one student after checking the email is free.
    ///
    /// # Errors
    /// - `EmailTaken` when any stored student has the same email.
    pub fn add_student(&self, student: &NewStudent) -> ServiceResult<Student> {
        if self.repo.select_exists_email(&student.email)? {
            warn!("event=student_create module=service status=rejected reason=email_taken");
            return Err(StudentServiceError::EmailTaken(student.email.clone()));
        }

        let saved = self.repo.save(student)?;
        info!(
            "event=student_create module=service status=ok id={}",
            saved.id
        );
        Ok(saved)
    }

    /// Deletes one student after checking it exists.
    ///
    /// # Errors
    /// - `StudentNotFound` when no student has this id, including when the row
    ///   disappears between the check and the delete.
    pub fn delete_student(&self, id: StudentId) -> ServiceResult<()> {
        if !self.repo.exists_by_id(id)? {
            warn!("event=student_delete module=service status=rejected reason=not_found id={id}");
            return Err(StudentServiceError::StudentNotFound(id));
        }

        self.repo.delete_by_id(id)?;
        info!("event=student_delete module=service status=ok id={id}");
        Ok(())
    }
}
