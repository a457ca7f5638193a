//! Domain model for the student registry.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every persisted student is identified by a storage-assigned `StudentId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod student;
