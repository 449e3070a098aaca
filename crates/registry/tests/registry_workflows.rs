use proptest::prelude::*;

use registrar_academics::{Course, Grade, Instructor, Person, Student};
use registrar_core::{CourseId, DomainError, Entity, EntityKind, StudentId};
use registrar_registry::{Registry, RegistryConfig, RemovalPolicy, UpdateStudent};

fn campus() -> Registry {
    let mut registry = Registry::new();
    registry.add_student(Student::new("Ada", "S1", "CS"));
    registry.add_student(Student::new("Alan", "S2", "Maths"));
    registry.add_student(Student::new("Grace", "S3", "CS"));
    registry.add_instructor(Instructor::new("Barbara", "I1", "Computing"));
    registry.add_course(Course::new("Algorithms", "C1"));
    registry.add_course(Course::new("Logic", "C2"));
    registry
}

#[test]
fn term_from_registration_to_grades() {
    let mut registry = campus();

    registry.enroll_student("S1", "C1").unwrap();
    registry.enroll_student("S2", "C1").unwrap();
    registry.enroll_student("S1", "C2").unwrap();

    assert_eq!(
        registry.students_in_course("C1").unwrap(),
        &[StudentId::from("S1"), StudentId::from("S2")]
    );
    assert_eq!(
        registry.student_courses("S1").unwrap(),
        vec![CourseId::from("C1"), CourseId::from("C2")]
    );

    registry.assign_grade("C1", "S1", "A").unwrap();
    registry.assign_grade("C1", "S2", "F").unwrap();

    let ada = registry.find_student("S1").unwrap();
    assert_eq!(ada.grade_for(&CourseId::from("C1")), Some(Grade::A));
    assert_eq!(ada.grade_for(&CourseId::from("C2")), None);
    assert_eq!(
        registry.find_enrollment("C1", "S2").unwrap().grade(),
        Some(Grade::F)
    );

    // Grades can be revised.
    registry.assign_grade("C1", "S2", "E").unwrap();
    assert_eq!(
        registry.find_student("S2").unwrap().grade_for(&CourseId::from("C1")),
        Some(Grade::E)
    );
}

#[test]
fn lookups_fail_loudly_for_unknown_ids() {
    let mut registry = campus();

    assert_eq!(
        registry.find_student("S9").unwrap_err(),
        DomainError::not_found(EntityKind::Student, "S9")
    );
    assert_eq!(
        registry.find_instructor("I9").unwrap_err(),
        DomainError::not_found(EntityKind::Instructor, "I9")
    );
    assert!(registry.remove_course("C9").unwrap_err().is_not_found());
    assert!(registry
        .update_student("S9", UpdateStudent::default())
        .unwrap_err()
        .is_not_found());
    assert!(registry.find_enrollment("C1", "S1").unwrap_err().is_not_found());
    assert_eq!(registry.students().len(), 3);
}

#[test]
fn removed_student_is_no_longer_found() {
    let mut registry = campus();

    let removed = registry.remove_student("S3").unwrap();

    assert_eq!(removed.name(), "Grace");
    assert!(registry.find_student("S3").unwrap_err().is_not_found());
    assert!(registry.remove_student("S3").unwrap_err().is_not_found());
}

#[test]
fn configured_cascade_cleans_up_enrollments() {
    let config = RegistryConfig::from_lookup(|_| Some("cascade".to_string())).unwrap();
    let mut registry = Registry::with_config(config);
    registry.add_student(Student::new("Ada", "S1", "CS"));
    registry.add_course(Course::new("Algorithms", "C1"));
    registry.enroll_student("S1", "C1").unwrap();

    registry.remove_course("C1").unwrap();

    assert_eq!(registry.config().removal_policy, RemovalPolicy::Cascade);
    assert!(registry.enrollments().is_empty());
    assert!(registry.student_courses("S1").unwrap().is_empty());
}

#[test]
fn course_registered_with_initial_roster_has_no_enrollment_records() {
    let mut registry = campus();
    registry.add_course(Course::with_students("Seminar", "C3", vec!["S3".into()]));

    assert_eq!(
        registry.students_in_course("C3").unwrap(),
        &[StudentId::from("S3")]
    );
    assert!(registry.find_enrollment("C3", "S3").unwrap_err().is_not_found());
    assert_eq!(
        registry.enroll_student("S3", "C3").unwrap_err(),
        DomainError::duplicate_enrollment("S3", "C3")
    );
}

fn campus_with(policy: RemovalPolicy) -> Registry {
    let mut registry = Registry::with_config(RegistryConfig::new(policy));
    for i in 1..4 {
        registry.add_student(Student::new(format!("Student {i}"), format!("S{i}"), "CS"));
    }
    registry.add_course(Course::new("Algorithms", "C1"));
    registry.add_course(Course::new("Logic", "C2"));
    registry
}

#[test]
fn reregistered_course_starts_without_stale_grades() {
    let mut registry = campus();
    registry.enroll_student("S1", "C1").unwrap();
    registry.assign_grade("C1", "S1", "A").unwrap();

    registry.remove_course("C1").unwrap();
    registry.add_course(Course::new("Algorithms", "C1"));
    registry.enroll_student("S1", "C1").unwrap();

    let course_id = CourseId::from("C1");
    let pairs = registry
        .enrollments()
        .iter()
        .filter(|e| e.matches("C1", "S1"))
        .count();
    assert_eq!(pairs, 1);
    assert_eq!(
        registry.find_enrollment("C1", "S1").unwrap().grade(),
        registry.find_student("S1").unwrap().grade_for(&course_id)
    );

    registry.withdraw_student("C1", "S1").unwrap();
    assert!(registry.find_enrollment("C1", "S1").unwrap_err().is_not_found());
    assert!(registry.orphaned_enrollments().is_empty());
}

fn removal_policy() -> impl Strategy<Value = RemovalPolicy> {
    prop_oneof![Just(RemovalPolicy::Retain), Just(RemovalPolicy::Cascade)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: after any sequence of enroll/withdraw/grade/remove/re-add
    /// calls, every enrollment record is either reported as orphaned or
    /// mirrored on the course roster and in the student's course map with the
    /// same grade, and no registered pair has more than one record.
    #[test]
    fn enrollment_records_match_both_views(
        policy in removal_policy(),
        ops in prop::collection::vec((0u8..7, 1usize..4, 1usize..3, 0usize..7), 1..60)
    ) {
        let mut registry = campus_with(policy);
        let grades = ["A", "B", "C", "D", "E", "F", "Z"];

        for (op, student, course, grade) in ops {
            let student_id = format!("S{student}");
            let course_id = format!("C{course}");
            let _ = match op {
                0 => registry.enroll_student(&student_id, &course_id).map(|_| ()),
                1 => registry.withdraw_student(&course_id, &student_id).map(|_| ()),
                2 => registry.assign_grade(&course_id, &student_id, grades[grade]).map(|_| ()),
                3 => registry.remove_student(&student_id).map(|_| ()),
                4 => {
                    registry.add_student(Student::new("Returning", student_id.as_str(), "CS"));
                    Ok(())
                }
                5 => registry.remove_course(&course_id).map(|_| ()),
                _ => {
                    registry.add_course(Course::new("Reopened", course_id.as_str()));
                    Ok(())
                }
            };
        }

        let orphans = registry.orphaned_enrollments();
        if policy == RemovalPolicy::Cascade {
            prop_assert!(orphans.is_empty());
        }

        for enrollment in registry.enrollments() {
            if orphans.iter().any(|o| std::ptr::eq(*o, enrollment)) {
                continue;
            }
            let course = registry.find_course(enrollment.course_id().as_str()).unwrap();
            let student = registry.find_student(enrollment.student_id().as_str()).unwrap();

            let on_roster = course
                .enrolled_students()
                .iter()
                .filter(|id| *id == enrollment.student_id())
                .count();
            prop_assert_eq!(on_roster, 1);
            prop_assert_eq!(
                student.courses().get(enrollment.course_id()),
                Some(&enrollment.grade())
            );

            let records = registry
                .enrollments()
                .iter()
                .filter(|e| e.matches(enrollment.course_id().as_str(), enrollment.student_id().as_str()))
                .count();
            prop_assert_eq!(records, 1);
        }

        for student in registry.students() {
            prop_assert_eq!(
                student.courses().len(),
                registry
                    .enrollments()
                    .iter()
                    .filter(|e| e.student_id() == student.id())
                    .count()
            );
        }

        for course in registry.courses() {
            for student_id in course.enrolled_students() {
                prop_assert!(registry
                    .find_enrollment(course.id().as_str(), student_id.as_str())
                    .is_ok());
            }
        }
    }
}
