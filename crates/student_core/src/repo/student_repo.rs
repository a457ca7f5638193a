//! Student repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the storage-access operations the service layer relies on.
//! - Keep SQL details inside core persistence boundary.
//!
//! # Invariants
//! - `save` is a plain insert; it applies no content rules.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Email comparison is a literal, case-sensitive match.

use crate::db::DbError;
use crate::model::student::{Gender, NewStudent, Student, StudentId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_SELECT_SQL: &str = "SELECT id, name, email, gender FROM students";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for student persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(StudentId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted student data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage-access interface for students.
pub trait StudentRepository {
    /// Lists every stored student ordered by ascending id.
    fn find_all(&self) -> RepoResult<Vec<Student>>;
    /// Persists a new student and returns it with its assigned id.
    fn save(&self, student: &NewStudent) -> RepoResult<Student>;
    fn exists_by_id(&self, id: StudentId) -> RepoResult<bool>;
    /// Removes one student; `NotFound` when no row matched.
    fn delete_by_id(&self, id: StudentId) -> RepoResult<()>;
    fn select_exists_email(&self, email: &str) -> RepoResult<bool>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STUDENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn save(&self, student: &NewStudent) -> RepoResult<Student> {
        self.conn.execute(
            "INSERT INTO students (name, email, gender) VALUES (?1, ?2, ?3);",
            params![
                student.name.as_str(),
                student.email.as_str(),
                student.gender.as_str(),
            ],
        )?;

        Ok(student.clone().into_student(self.conn.last_insert_rowid()))
    }

    fn exists_by_id(&self, id: StudentId) -> RepoResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM students WHERE id = ?1);",
            [id],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }

    fn delete_by_id(&self, id: StudentId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn select_exists_email(&self, email: &str) -> RepoResult<bool> {
        let exists = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM students WHERE email = ?1);",
            [email],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(exists)
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let id: StudentId = row.get("id")?;
    let gender_text: String = row.get("gender")?;
    let gender = gender_text.parse::<Gender>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid gender `{gender_text}` in students.gender for id {id}"
        ))
    })?;

    Ok(Student {
        id,
        name: row.get("name")?,
        email: row.get("email")?,
        gender,
    })
}
