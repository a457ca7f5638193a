//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical student record and its creation payload.
//!
//! # Invariants
//! - `id` is assigned by storage and never reused for another student.
//! - `gender` is one of the closed `Gender` variants.
//! - The model carries no content rules; presence checks live at the HTTP boundary.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Storage-assigned identifier of a student row.
pub type StudentId = i64;

/// Closed set of genders accepted by the registry.
///
/// Serialized as the upper-case literals `MALE` / `FEMALE`, both on the wire
/// and in the `students.gender` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the canonical literal for this gender.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a text value is not a known gender literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl Display for UnknownGender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown gender `{}`; expected MALE|FEMALE", self.0)
    }
}

impl Error for UnknownGender {}

impl FromStr for Gender {
    type Err = UnknownGender;

    /// Parses the exact upper-case literal. No case folding is applied.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

/// Persisted student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub gender: Gender,
}

/// Creation payload for a student that has no id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub gender: Gender,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            gender,
        }
    }

    /// Attaches the storage-assigned id.
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            email: self.email,
            gender: self.gender,
        }
    }
}
