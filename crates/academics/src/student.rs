use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use registrar_core::{CourseId, Entity, StudentId};

use crate::enrollment::Enrollment;
use crate::grade::Grade;
use crate::person::{Identity, Person};

/// A student and the courses they are enrolled in.
///
/// `courses` is the per-student authoritative record of enrollment: every
/// course the student takes is a key, mapped to the grade earned so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    identity: Identity<StudentId>,
    major: String,
    courses: BTreeMap<CourseId, Option<Grade>>,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<StudentId>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity::new(name, id_number.into()),
            major: major.into(),
            courses: BTreeMap::new(),
        }
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn courses(&self) -> &BTreeMap<CourseId, Option<Grade>> {
        &self.courses
    }

    pub fn is_enrolled_in(&self, course_id: &CourseId) -> bool {
        self.courses.contains_key(course_id)
    }

    /// Grade for a course; `None` both when ungraded and when not enrolled.
    pub fn grade_for(&self, course_id: &CourseId) -> Option<Grade> {
        self.courses.get(course_id).copied().flatten()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.identity.set_name(name);
    }

    pub fn set_major(&mut self, major: impl Into<String>) {
        self.major = major.into();
    }

    /// Record the enrollment's course (and grade) if it belongs to this student.
    ///
    /// Enrollments for other students are ignored.
    pub fn add_course(&mut self, enrollment: &Enrollment) {
        if enrollment.student_id() == self.id() {
            self.courses
                .insert(enrollment.course_id().clone(), enrollment.grade());
        }
    }

    pub(crate) fn record_grade(&mut self, course_id: &CourseId, grade: Grade) {
        self.courses.insert(course_id.clone(), Some(grade));
    }

    /// Forget a course. Returns whether it was present.
    pub fn drop_course(&mut self, course_id: &CourseId) -> bool {
        self.courses.remove(course_id).is_some()
    }
}

impl Entity for Student {
    type Id = StudentId;

    fn id(&self) -> &Self::Id {
        self.identity.id_number()
    }
}

impl Person for Student {
    fn identity(&self) -> &Identity<StudentId> {
        &self.identity
    }
}

impl core::fmt::Display for Student {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:>7} {}", "ID:", self.id())?;
        writeln!(f, "{:>7} {}", "Name:", self.name())?;
        write!(f, "{:>7} {}", "Major:", self.major)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Student {
        Student::new("Ada", "S1", "CS")
    }

    #[test]
    fn new_student_has_no_courses() {
        let student = ada();
        assert!(student.courses().is_empty());
        assert_eq!(student.major(), "CS");
        assert_eq!(student.name(), "Ada");
    }

    #[test]
    fn add_course_records_own_enrollment() {
        let mut student = ada();
        let enrollment = Enrollment::new("S1", "C1", Some(Grade::B));
        student.add_course(&enrollment);

        assert_eq!(student.courses().len(), 1);
        assert_eq!(student.grade_for(&CourseId::from("C1")), Some(Grade::B));
    }

    #[test]
    fn add_course_ignores_other_students_enrollment() {
        let mut student = ada();
        let enrollment = Enrollment::new("S2", "C1", None);
        student.add_course(&enrollment);

        assert!(!student.is_enrolled_in(&CourseId::from("C1")));
    }

    #[test]
    fn drop_course_reports_presence() {
        let mut student = ada();
        student.add_course(&Enrollment::new("S1", "C1", None));

        assert!(student.drop_course(&CourseId::from("C1")));
        assert!(!student.drop_course(&CourseId::from("C1")));
    }

    #[test]
    fn summary_aligns_labels() {
        assert_eq!(
            ada().to_string(),
            "    ID: S1\n  Name: Ada\n Major: CS"
        );
    }
}
