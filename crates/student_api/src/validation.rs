//! Request-body validation at the HTTP boundary.
//!
//! # Responsibility
//! - Turn a loosely-typed JSON body into a `NewStudent`.
//! - Report every offending field at once.
//!
//! # Invariants
//! - `name`, `email` and `gender` must be present and non-blank.
//! - `gender` must be one of the `Gender` literals; no case folding.
//! - No format rule applies to `email`; any non-blank text is accepted.

use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use student_core::{Gender, NewStudent};

/// Raw create-student body. Unknown fields (including `id`) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// One or more fields of a request body failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed for student:")?;
        for (index, err) in self.errors.iter().enumerate() {
            let separator = if index == 0 { " " } else { "; " };
            write!(f, "{separator}{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Validates a create-student body and builds the domain payload.
///
/// # Errors
/// Returns a `ValidationError` listing every missing or blank field and an
/// unknown `gender` literal.
pub fn validate_new_student(request: StudentRequest) -> Result<NewStudent, ValidationError> {
    let mut errors = Vec::new();

    let name = required(&mut errors, "name", request.name);
    let email = required(&mut errors, "email", request.email);
    let gender = required(&mut errors, "gender", request.gender).and_then(|raw| {
        match raw.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(err) => {
                errors.push(FieldError {
                    field: "gender",
                    message: err.to_string(),
                });
                None
            }
        }
    });

    let (Some(name), Some(email), Some(gender)) = (name, email, gender) else {
        return Err(ValidationError { errors });
    };

    Ok(NewStudent::new(name, email, gender))
}

fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            errors.push(FieldError {
                field,
                message: "must not be blank".to_string(),
            });
            None
        }
    }
}
