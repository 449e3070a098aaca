//! The registrar's top-level record keeper.
//!
//! [`Registry`] owns every student, instructor, course and enrollment and is
//! the only mutation surface over those collections.

pub mod config;
pub mod event;
pub mod registry;

pub use config::{RegistryConfig, RemovalPolicy};
pub use event::RegistryEvent;
pub use registry::{Registry, UpdateCourse, UpdateInstructor, UpdateStudent};
