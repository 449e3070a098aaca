use chrono::Utc;

use registrar_academics::{Course, Enrollment, Grade, Instructor, Student};
use registrar_core::{CourseId, DomainError, DomainResult, Entity, EntityKind, StudentId};

use crate::config::{RegistryConfig, RemovalPolicy};
use crate::event::RegistryEvent;

/// Field changes for [`Registry::update_student`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub major: Option<String>,
}

impl UpdateStudent {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.major.is_none()
    }
}

/// Field changes for [`Registry::update_instructor`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateInstructor {
    pub name: Option<String>,
    pub department: Option<String>,
}

impl UpdateInstructor {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.department.is_none()
    }
}

/// Field changes for [`Registry::update_course`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCourse {
    pub course_name: Option<String>,
}

impl UpdateCourse {
    pub fn is_empty(&self) -> bool {
        self.course_name.is_none()
    }
}

/// Owner of all students, instructors, courses and enrollments.
///
/// Lookups are linear scans by identifier. Every `find_*` either returns a
/// match or a not-found error, and every operation built on a lookup
/// propagates that error unchanged.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    config: RegistryConfig,
    students: Vec<Student>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    history: Vec<RegistryEvent>,
}

fn index_of<T>(items: &[T], kind: EntityKind, id: &str) -> DomainResult<usize>
where
    T: Entity,
    T::Id: AsRef<str>,
{
    items
        .iter()
        .position(|item| item.has_id(id))
        .ok_or_else(|| DomainError::not_found(kind, id))
}

fn is_registered<T>(items: &[T], id: &str) -> bool
where
    T: Entity,
    T::Id: AsRef<str>,
{
    items.iter().any(|item| item.has_id(id))
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Every successful mutation, oldest first.
    pub fn history(&self) -> &[RegistryEvent] {
        &self.history
    }

    // ---- students ----

    /// Register a student. Returns `false` (and changes nothing) if a student
    /// with the same ID is already registered.
    ///
    /// Enrollments left behind by a previously removed student with this ID
    /// are purged first, so the new record starts with no history.
    pub fn add_student(&mut self, student: Student) -> bool {
        if is_registered(&self.students, student.id().as_str()) {
            tracing::debug!(student_id = %student.id(), "student already registered; ignoring");
            return false;
        }

        let enrollments_purged = self.purge_stale_student(student.id());

        tracing::info!(student_id = %student.id(), enrollments_purged, "student registered");
        self.history.push(RegistryEvent::StudentAdded {
            student_id: student.id().clone(),
            enrollments_purged,
            occurred_at: Utc::now(),
        });
        self.students.push(student);
        true
    }

    pub fn find_student(&self, student_id: &str) -> DomainResult<&Student> {
        let index = index_of(&self.students, EntityKind::Student, student_id)?;
        Ok(&self.students[index])
    }

    /// Remove a student, applying the configured [`RemovalPolicy`].
    pub fn remove_student(&mut self, student_id: &str) -> DomainResult<Student> {
        let index = index_of(&self.students, EntityKind::Student, student_id)?;
        let student = self.students.remove(index);

        let enrollments_dropped = match self.config.removal_policy {
            RemovalPolicy::Retain => 0,
            RemovalPolicy::Cascade => {
                for course in &mut self.courses {
                    course.remove_student(student_id);
                }
                let before = self.enrollments.len();
                self.enrollments.retain(|e| e.student_id() != student.id());
                before - self.enrollments.len()
            }
        };

        tracing::info!(student_id, enrollments_dropped, "student removed");
        self.history.push(RegistryEvent::StudentRemoved {
            student_id: student.id().clone(),
            enrollments_dropped,
            occurred_at: Utc::now(),
        });
        Ok(student)
    }

    pub fn update_student(&mut self, student_id: &str, changes: UpdateStudent) -> DomainResult<()> {
        let index = index_of(&self.students, EntityKind::Student, student_id)?;
        if changes.is_empty() {
            return Ok(());
        }
        let student = &mut self.students[index];

        if let Some(name) = changes.name {
            student.set_name(name);
        }
        if let Some(major) = changes.major {
            student.set_major(major);
        }

        tracing::debug!(student_id, "student updated");
        self.history.push(RegistryEvent::StudentUpdated {
            student_id: student.id().clone(),
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    // ---- instructors ----

    /// Register an instructor. Returns `false` (and changes nothing) if an
    /// instructor with the same ID is already registered.
    pub fn add_instructor(&mut self, instructor: Instructor) -> bool {
        if is_registered(&self.instructors, instructor.id().as_str()) {
            tracing::debug!(instructor_id = %instructor.id(), "instructor already registered; ignoring");
            return false;
        }

        tracing::info!(instructor_id = %instructor.id(), "instructor registered");
        self.history.push(RegistryEvent::InstructorAdded {
            instructor_id: instructor.id().clone(),
            occurred_at: Utc::now(),
        });
        self.instructors.push(instructor);
        true
    }

    pub fn find_instructor(&self, instructor_id: &str) -> DomainResult<&Instructor> {
        let index = index_of(&self.instructors, EntityKind::Instructor, instructor_id)?;
        Ok(&self.instructors[index])
    }

    pub fn remove_instructor(&mut self, instructor_id: &str) -> DomainResult<Instructor> {
        let index = index_of(&self.instructors, EntityKind::Instructor, instructor_id)?;
        let instructor = self.instructors.remove(index);

        tracing::info!(instructor_id, "instructor removed");
        self.history.push(RegistryEvent::InstructorRemoved {
            instructor_id: instructor.id().clone(),
            occurred_at: Utc::now(),
        });
        Ok(instructor)
    }

    pub fn update_instructor(
        &mut self,
        instructor_id: &str,
        changes: UpdateInstructor,
    ) -> DomainResult<()> {
        let index = index_of(&self.instructors, EntityKind::Instructor, instructor_id)?;
        if changes.is_empty() {
            return Ok(());
        }
        let instructor = &mut self.instructors[index];

        if let Some(name) = changes.name {
            instructor.set_name(name);
        }
        if let Some(department) = changes.department {
            instructor.set_department(department);
        }

        tracing::debug!(instructor_id, "instructor updated");
        self.history.push(RegistryEvent::InstructorUpdated {
            instructor_id: instructor.id().clone(),
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    // ---- courses ----

    /// Register a course. Returns `false` (and changes nothing) if a course
    /// with the same ID is already registered.
    ///
    /// Enrollments left behind by a previously removed course with this ID
    /// are purged first.
    pub fn add_course(&mut self, course: Course) -> bool {
        if is_registered(&self.courses, course.id().as_str()) {
            tracing::debug!(course_id = %course.id(), "course already registered; ignoring");
            return false;
        }

        let enrollments_purged = self.purge_stale_course(course.id());

        tracing::info!(course_id = %course.id(), enrollments_purged, "course registered");
        self.history.push(RegistryEvent::CourseAdded {
            course_id: course.id().clone(),
            enrollments_purged,
            occurred_at: Utc::now(),
        });
        self.courses.push(course);
        true
    }

    pub fn find_course(&self, course_id: &str) -> DomainResult<&Course> {
        let index = index_of(&self.courses, EntityKind::Course, course_id)?;
        Ok(&self.courses[index])
    }

    /// Remove a course, applying the configured [`RemovalPolicy`].
    pub fn remove_course(&mut self, course_id: &str) -> DomainResult<Course> {
        let index = index_of(&self.courses, EntityKind::Course, course_id)?;
        let course = self.courses.remove(index);

        let enrollments_dropped = match self.config.removal_policy {
            RemovalPolicy::Retain => 0,
            RemovalPolicy::Cascade => {
                for student in &mut self.students {
                    student.drop_course(course.id());
                }
                let before = self.enrollments.len();
                self.enrollments.retain(|e| e.course_id() != course.id());
                before - self.enrollments.len()
            }
        };

        tracing::info!(course_id, enrollments_dropped, "course removed");
        self.history.push(RegistryEvent::CourseRemoved {
            course_id: course.id().clone(),
            enrollments_dropped,
            occurred_at: Utc::now(),
        });
        Ok(course)
    }

    pub fn update_course(&mut self, course_id: &str, changes: UpdateCourse) -> DomainResult<()> {
        let index = index_of(&self.courses, EntityKind::Course, course_id)?;
        if changes.is_empty() {
            return Ok(());
        }
        let course = &mut self.courses[index];

        if let Some(course_name) = changes.course_name {
            course.set_course_name(course_name);
        }

        tracing::debug!(course_id, "course updated");
        self.history.push(RegistryEvent::CourseUpdated {
            course_id: course.id().clone(),
            occurred_at: Utc::now(),
        });
        Ok(())
    }

    // ---- enrollments ----

    /// Enroll a registered student in a registered course.
    ///
    /// Fails with `DuplicateEnrollment` if the student is already on the
    /// course roster or an enrollment record for the pair already exists.
    pub fn enroll_student(&mut self, student_id: &str, course_id: &str) -> DomainResult<&Enrollment> {
        let student_index = index_of(&self.students, EntityKind::Student, student_id)?;
        let course_index = index_of(&self.courses, EntityKind::Course, course_id)?;
        if self.enrollment_index(course_id, student_id).is_ok() {
            return Err(DomainError::duplicate_enrollment(student_id, course_id));
        }

        let enrollment =
            self.courses[course_index].add_student(&mut self.students[student_index])?;

        tracing::info!(student_id, course_id, "student enrolled");
        self.history.push(RegistryEvent::StudentEnrolled {
            student_id: enrollment.student_id().clone(),
            course_id: enrollment.course_id().clone(),
            occurred_at: Utc::now(),
        });
        self.enrollments.push(enrollment);
        Ok(&self.enrollments[self.enrollments.len() - 1])
    }

    fn enrollment_index(&self, course_id: &str, student_id: &str) -> DomainResult<usize> {
        self.enrollments
            .iter()
            .position(|e| e.matches(course_id, student_id))
            .ok_or_else(|| DomainError::enrollment_not_found(student_id, course_id))
    }

    pub fn find_enrollment(&self, course_id: &str, student_id: &str) -> DomainResult<&Enrollment> {
        let index = self.enrollment_index(course_id, student_id)?;
        Ok(&self.enrollments[index])
    }

    /// Grade a student in a course.
    ///
    /// The student must still be registered, since their course map is
    /// updated alongside the enrollment record.
    pub fn assign_grade(
        &mut self,
        course_id: &str,
        student_id: &str,
        grade: &str,
    ) -> DomainResult<Grade> {
        let enrollment_index = self.enrollment_index(course_id, student_id)?;
        let student_index = index_of(&self.students, EntityKind::Student, student_id)?;

        let grade = self.enrollments[enrollment_index]
            .assign_grade(&mut self.students[student_index], grade)?;

        tracing::info!(student_id, course_id, %grade, "grade assigned");
        self.history.push(RegistryEvent::GradeAssigned {
            student_id: StudentId::from(student_id),
            course_id: CourseId::from(course_id),
            grade,
            occurred_at: Utc::now(),
        });
        Ok(grade)
    }

    /// Undo an enrollment on both sides and drop its record.
    ///
    /// Sides that are no longer registered are skipped.
    pub fn withdraw_student(&mut self, course_id: &str, student_id: &str) -> DomainResult<Enrollment> {
        let index = self.enrollment_index(course_id, student_id)?;
        let enrollment = self.enrollments.remove(index);

        if let Some(course) = self.courses.iter_mut().find(|c| c.id() == enrollment.course_id()) {
            course.remove_student(student_id);
        }
        if let Some(student) = self
            .students
            .iter_mut()
            .find(|s| s.id() == enrollment.student_id())
        {
            student.drop_course(enrollment.course_id());
        }

        tracing::info!(student_id, course_id, "student withdrawn");
        self.history.push(RegistryEvent::StudentWithdrawn {
            student_id: enrollment.student_id().clone(),
            course_id: enrollment.course_id().clone(),
            occurred_at: Utc::now(),
        });
        Ok(enrollment)
    }

    pub fn students_in_course(&self, course_id: &str) -> DomainResult<&[StudentId]> {
        Ok(self.find_course(course_id)?.enrolled_students())
    }

    pub fn student_courses(&self, student_id: &str) -> DomainResult<Vec<CourseId>> {
        Ok(self.find_student(student_id)?.courses().keys().cloned().collect())
    }

    /// Drop every enrollment of a student ID that is not registered, taking the
    /// ID off the rosters of courses still holding it.
    fn purge_stale_student(&mut self, student_id: &StudentId) -> usize {
        let courses = &mut self.courses;
        let before = self.enrollments.len();
        self.enrollments.retain(|e| {
            if e.student_id() != student_id {
                return true;
            }
            if let Some(course) = courses.iter_mut().find(|c| c.id() == e.course_id()) {
                course.remove_student(student_id.as_str());
            }
            false
        });
        before - self.enrollments.len()
    }

    /// Drop every enrollment of a course ID that is not registered, removing
    /// the course from the maps of students still holding it.
    fn purge_stale_course(&mut self, course_id: &CourseId) -> usize {
        let students = &mut self.students;
        let before = self.enrollments.len();
        self.enrollments.retain(|e| {
            if e.course_id() != course_id {
                return true;
            }
            if let Some(student) = students.iter_mut().find(|s| s.id() == e.student_id()) {
                student.drop_course(course_id);
            }
            false
        });
        before - self.enrollments.len()
    }

    /// Enrollments whose student or course is no longer registered.
    pub fn orphaned_enrollments(&self) -> Vec<&Enrollment> {
        self.enrollments
            .iter()
            .filter(|e| {
                !is_registered(&self.students, e.student_id().as_str())
                    || !is_registered(&self.courses, e.course_id().as_str())
            })
            .collect()
    }
}
