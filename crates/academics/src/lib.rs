//! Academic records domain: people, courses and enrollments.
//!
//! Everything here is deterministic, in-memory domain logic (no IO, no
//! storage). The `Registry` in `registrar-registry` owns collections of these
//! records; this crate only knows how a single course and a single student are
//! kept consistent with each other.

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod instructor;
pub mod person;
pub mod student;

pub use course::Course;
pub use enrollment::{Enrollment, link};
pub use grade::Grade;
pub use instructor::Instructor;
pub use person::{Identity, Person};
pub use student::Student;
