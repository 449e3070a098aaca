//! Enrollment: the join record between one student and one course.

use serde::{Deserialize, Serialize};

use registrar_core::{CourseId, DomainError, DomainResult, Entity, StudentId};

use crate::course::Course;
use crate::grade::Grade;
use crate::student::Student;

/// Links one student to one course, with an optional grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    student_id: StudentId,
    course_id: CourseId,
    grade: Option<Grade>,
}

impl Enrollment {
    /// Build the record only. Use [`link`] to also update course and student.
    pub fn new(
        student_id: impl Into<StudentId>,
        course_id: impl Into<CourseId>,
        grade: Option<Grade>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            grade,
        }
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// Whether this record links the given course and student.
    pub fn matches(&self, course_id: &str, student_id: &str) -> bool {
        self.course_id == course_id && self.student_id == student_id
    }

    /// Grade the enrolled student.
    ///
    /// `student` must be the student this enrollment refers to. On any error
    /// neither the enrollment nor the student is modified.
    pub fn assign_grade(&mut self, student: &mut Student, grade: &str) -> DomainResult<Grade> {
        let grade: Grade = grade.parse()?;
        if student.id() != &self.student_id {
            return Err(DomainError::invariant(format!(
                "enrollment belongs to student {}, not {}",
                self.student_id,
                student.id()
            )));
        }

        self.grade = Some(grade);
        student.record_grade(&self.course_id, grade);
        Ok(grade)
    }
}

impl core::fmt::Display for Enrollment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.grade {
            Some(grade) => write!(f, "({}, {}, {})", self.course_id, self.student_id, grade),
            None => write!(f, "({}, {}, -)", self.course_id, self.student_id),
        }
    }
}

/// Enroll `student` in `course`, updating both sides.
///
/// The course roster is written first, then the student's course map. This is
/// the only place the two views of an enrollment are created together.
pub fn link(course: &mut Course, student: &mut Student, grade: Option<Grade>) -> Enrollment {
    let enrollment = Enrollment::new(student.id().clone(), course.id().clone(), grade);
    course.enrollment(&enrollment);
    student.add_course(&enrollment);
    enrollment
}
