//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Category of a registered record, used to build not-found messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Student,
    Instructor,
    Course,
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            EntityKind::Student => "student",
            EntityKind::Instructor => "instructor",
            EntityKind::Course => "course",
        })
    }
}

/// Domain-level error.
///
/// Every variant describes a deterministic business failure. Callers decide
/// how (and whether) to surface it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record of the given kind carries the requested identifier.
    #[error("no {kind} record found for ID: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// No enrollment links the given student and course.
    #[error("student ID {student_id} is not enrolled in course ID {course_id}")]
    EnrollmentNotFound { student_id: String, course_id: String },

    /// The student already appears on the course roster.
    #[error("student ID {student_id} is already enrolled in course {course_id}")]
    DuplicateEnrollment { student_id: String, course_id: String },

    /// The supplied grade is not one of A, B, C, D, E, F.
    #[error("invalid grade: {0:?} (expected one of A, B, C, D, E, F)")]
    InvalidGrade(String),

    /// A value failed validation (e.g. malformed configuration).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn enrollment_not_found(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Self {
        Self::EnrollmentNotFound {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }

    pub fn duplicate_enrollment(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
    ) -> Self {
        Self::DuplicateEnrollment {
            student_id: student_id.into(),
            course_id: course_id.into(),
        }
    }

    pub fn invalid_grade(grade: impl Into<String>) -> Self {
        Self::InvalidGrade(grade.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Whether this error means "nothing matched the lookup".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::NotFound { .. } | DomainError::EnrollmentNotFound { .. }
        )
    }
}
