// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nodue_domain::{Role, SubjectType};

use super::{Fixture, create_fixture, create_user};
use crate::PersistenceError;

#[test]
fn test_classes_listed_by_year_then_section() {
    let mut fixture: Fixture = create_fixture();
    let persistence = &mut fixture.persistence;

    persistence.create_class(fixture.department_id, 1, "B").unwrap();
    persistence.create_class(fixture.department_id, 1, "A").unwrap();

    let classes = persistence
        .list_classes_for_department(fixture.department_id)
        .unwrap();
    let labels: Vec<(i32, String)> = classes
        .into_iter()
        .map(|class| (class.year, class.section))
        .collect();

    assert_eq!(
        labels,
        vec![
            (1, String::from("A")),
            (1, String::from("B")),
            (3, String::from("A")),
        ]
    );
}

#[test]
fn test_subjects_keep_their_type() {
    let mut fixture: Fixture = create_fixture();

    let subjects = fixture
        .persistence
        .list_subjects_for_department(fixture.department_id)
        .unwrap();

    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0].name, "CSE Core 1");
    assert_eq!(subjects[0].subject_type, SubjectType::Theory);
    assert_eq!(subjects[1].subject_type, SubjectType::Library);
}

#[test]
fn test_advisor_class_lookup() {
    let mut fixture: Fixture = create_fixture();
    let persistence = &mut fixture.persistence;

    assert!(
        persistence
            .get_advisor_class(fixture.faculty_id)
            .unwrap()
            .is_none()
    );

    persistence
        .set_class_advisor(fixture.class_id, fixture.faculty_id)
        .unwrap();

    let (class, department) = persistence
        .get_advisor_class(fixture.faculty_id)
        .unwrap()
        .unwrap();
    assert_eq!(class.class_id, fixture.class_id);
    assert_eq!(class.advisor_id, Some(fixture.faculty_id));
    assert_eq!(department.name, "CSE");
}

#[test]
fn test_class_advisor_is_never_replaced() {
    let mut fixture: Fixture = create_fixture();
    let persistence = &mut fixture.persistence;

    let other_user: i64 = create_user(persistence, "faculty.cse2@college.edu", Role::Faculty);
    let other_faculty: i64 = persistence
        .create_faculty(other_user, fixture.department_id)
        .unwrap();

    persistence
        .set_class_advisor(fixture.class_id, fixture.faculty_id)
        .unwrap();
    let result = persistence.set_class_advisor(fixture.class_id, other_faculty);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
    let (class, _) = persistence
        .get_class_with_department(fixture.class_id)
        .unwrap()
        .unwrap();
    assert_eq!(class.advisor_id, Some(fixture.faculty_id));
}

#[test]
fn test_faculty_advises_at_most_one_class() {
    let mut fixture: Fixture = create_fixture();
    let persistence = &mut fixture.persistence;
    let second_class: i64 = persistence
        .create_class(fixture.department_id, 4, "A")
        .unwrap();

    persistence
        .set_class_advisor(fixture.class_id, fixture.faculty_id)
        .unwrap();
    let result = persistence.set_class_advisor(second_class, fixture.faculty_id);

    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}

#[test]
fn test_assignments_carry_class_department_and_subject() {
    let mut fixture: Fixture = create_fixture();

    let assignments = fixture
        .persistence
        .list_assignments_for_faculty(fixture.faculty_id)
        .unwrap();

    assert_eq!(assignments.len(), 1);
    let (assignment, class, department, subject) = &assignments[0];
    assert_eq!(assignment.faculty_id, fixture.faculty_id);
    assert_eq!(class.year, 3);
    assert_eq!(department.name, "CSE");
    assert_eq!(subject.subject_id, fixture.subject_ids[0]);
}

#[test]
fn test_faculty_lookup_by_user() {
    let mut fixture: Fixture = create_fixture();

    let faculty = fixture
        .persistence
        .get_faculty_by_user_id(fixture.faculty_user_id)
        .unwrap()
        .unwrap();
    assert_eq!(faculty.faculty_id, fixture.faculty_id);

    let listed = fixture
        .persistence
        .list_faculty_for_department(fixture.department_id)
        .unwrap();
    assert_eq!(listed, vec![faculty]);
}
