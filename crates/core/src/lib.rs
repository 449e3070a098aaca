//! `registrar-core`: shared building blocks for the registrar domain.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, the `Entity` trait and string identifiers.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, EntityKind};
pub use id::{CourseId, InstructorId, StudentId};
