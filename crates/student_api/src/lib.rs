//! HTTP surface for the student registry.
//!
//! # Responsibility
//! - Expose list/create/delete over `actix-web` under `/api/v1/students`.
//! - Validate request bodies before they reach the service layer.
//! - Map every error kind to an explicit HTTP status.

pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;


pub use error::{ApiError, ErrorBody};
pub use server::{start_server, ServerConfig};
pub use state::AppState;
pub use validation::{validate_new_student, StudentRequest, ValidationError};
