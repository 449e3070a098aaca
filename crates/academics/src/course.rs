use serde::{Deserialize, Serialize};

use registrar_core::{CourseId, DomainError, DomainResult, Entity, StudentId};

use crate::enrollment::{self, Enrollment};
use crate::student::Student;

/// A course and its roster, in enrollment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    course_name: String,
    course_id: CourseId,
    enrolled_students: Vec<StudentId>,
}

impl Course {
    pub fn new(course_name: impl Into<String>, course_id: impl Into<CourseId>) -> Self {
        Self::with_students(course_name, course_id, Vec::new())
    }

    /// Create a course with a pre-filled roster.
    ///
    /// Repeated IDs are collapsed so the roster never holds duplicates. No
    /// enrollment records are created for these students.
    pub fn with_students(
        course_name: impl Into<String>,
        course_id: impl Into<CourseId>,
        students: Vec<StudentId>,
    ) -> Self {
        let mut enrolled_students: Vec<StudentId> = Vec::with_capacity(students.len());
        for student_id in students {
            if !enrolled_students.contains(&student_id) {
                enrolled_students.push(student_id);
            }
        }

        Self {
            course_name: course_name.into(),
            course_id: course_id.into(),
            enrolled_students,
        }
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn enrolled_students(&self) -> &[StudentId] {
        &self.enrolled_students
    }

    pub fn set_course_name(&mut self, course_name: impl Into<String>) {
        self.course_name = course_name.into();
    }

    /// Put the enrollment's student on the roster if the enrollment is for
    /// this course.
    pub fn enrollment(&mut self, enrollment: &Enrollment) {
        if enrollment.course_id() == &self.course_id
            && self.find_enrolled_student(enrollment.student_id().as_str()).is_none()
        {
            self.enrolled_students.push(enrollment.student_id().clone());
        }
    }

    /// Enroll a student, creating the enrollment record.
    pub fn add_student(&mut self, student: &mut Student) -> DomainResult<Enrollment> {
        if self.find_enrolled_student(student.id().as_str()).is_some() {
            return Err(DomainError::duplicate_enrollment(
                student.id().as_str(),
                self.course_id.as_str(),
            ));
        }
        Ok(enrollment::link(self, student, None))
    }

    pub fn find_enrolled_student(&self, student_id: &str) -> Option<&StudentId> {
        self.enrolled_students.iter().find(|id| *id == student_id)
    }

    /// Take a student off the roster. No-op when absent.
    ///
    /// Only the roster changes: the student's own course map and any
    /// enrollment record are left as they are.
    pub fn remove_student(&mut self, student_id: &str) -> bool {
        match self
            .enrolled_students
            .iter()
            .position(|id| id == student_id)
        {
            Some(index) => {
                self.enrolled_students.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Entity for Course {
    type Id = CourseId;

    fn id(&self) -> &Self::Id {
        &self.course_id
    }
}

impl core::fmt::Display for Course {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:>18} {}", "ID:", self.course_id)?;
        writeln!(f, "{:>18} {}", "Course Name:", self.course_name)?;
        let roster: Vec<&str> = self.enrolled_students.iter().map(StudentId::as_str).collect();
        write!(f, "{:>18} [{}]", "Enrolled Students:", roster.join(", "))
    }
}
