//! Audit trail of registry mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use registrar_academics::Grade;
use registrar_core::{CourseId, InstructorId, StudentId};
use registrar_events::Event;

/// One successful mutation of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryEvent {
    StudentAdded {
        student_id: StudentId,
        /// Stale enrollments of an earlier student with this ID that were dropped.
        enrollments_purged: usize,
        occurred_at: DateTime<Utc>,
    },
    StudentUpdated {
        student_id: StudentId,
        occurred_at: DateTime<Utc>,
    },
    StudentRemoved {
        student_id: StudentId,
        /// Enrollment records dropped along with the student.
        enrollments_dropped: usize,
        occurred_at: DateTime<Utc>,
    },
    InstructorAdded {
        instructor_id: InstructorId,
        occurred_at: DateTime<Utc>,
    },
    InstructorUpdated {
        instructor_id: InstructorId,
        occurred_at: DateTime<Utc>,
    },
    InstructorRemoved {
        instructor_id: InstructorId,
        occurred_at: DateTime<Utc>,
    },
    CourseAdded {
        course_id: CourseId,
        /// Stale enrollments of an earlier course with this ID that were dropped.
        enrollments_purged: usize,
        occurred_at: DateTime<Utc>,
    },
    CourseUpdated {
        course_id: CourseId,
        occurred_at: DateTime<Utc>,
    },
    CourseRemoved {
        course_id: CourseId,
        /// Enrollment records dropped along with the course.
        enrollments_dropped: usize,
        occurred_at: DateTime<Utc>,
    },
    StudentEnrolled {
        student_id: StudentId,
        course_id: CourseId,
        occurred_at: DateTime<Utc>,
    },
    StudentWithdrawn {
        student_id: StudentId,
        course_id: CourseId,
        occurred_at: DateTime<Utc>,
    },
    GradeAssigned {
        student_id: StudentId,
        course_id: CourseId,
        grade: Grade,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for RegistryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            RegistryEvent::StudentAdded { .. } => "registry.student.added",
            RegistryEvent::StudentUpdated { .. } => "registry.student.updated",
            RegistryEvent::StudentRemoved { .. } => "registry.student.removed",
            RegistryEvent::InstructorAdded { .. } => "registry.instructor.added",
            RegistryEvent::InstructorUpdated { .. } => "registry.instructor.updated",
            RegistryEvent::InstructorRemoved { .. } => "registry.instructor.removed",
            RegistryEvent::CourseAdded { .. } => "registry.course.added",
            RegistryEvent::CourseUpdated { .. } => "registry.course.updated",
            RegistryEvent::CourseRemoved { .. } => "registry.course.removed",
            RegistryEvent::StudentEnrolled { .. } => "registry.enrollment.created",
            RegistryEvent::StudentWithdrawn { .. } => "registry.enrollment.withdrawn",
            RegistryEvent::GradeAssigned { .. } => "registry.enrollment.graded",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            RegistryEvent::StudentAdded { occurred_at, .. }
            | RegistryEvent::StudentUpdated { occurred_at, .. }
            | RegistryEvent::StudentRemoved { occurred_at, .. }
            | RegistryEvent::InstructorAdded { occurred_at, .. }
            | RegistryEvent::InstructorUpdated { occurred_at, .. }
            | RegistryEvent::InstructorRemoved { occurred_at, .. }
            | RegistryEvent::CourseAdded { occurred_at, .. }
            | RegistryEvent::CourseUpdated { occurred_at, .. }
            | RegistryEvent::CourseRemoved { occurred_at, .. }
            | RegistryEvent::StudentEnrolled { occurred_at, .. }
            | RegistryEvent::StudentWithdrawn { occurred_at, .. }
            | RegistryEvent::GradeAssigned { occurred_at, .. } => *occurred_at,
        }
    }
}
