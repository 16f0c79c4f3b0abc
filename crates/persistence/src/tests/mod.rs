// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod catalog_tests;

use nodue_domain::{Role, SubjectType};

use crate::Persistence;

/// Lowest bcrypt cost accepted; keeps hashing fast in tests.
pub const TEST_COST: u32 = 4;

/// A small populated database: one department, one class, two subjects,
/// one faculty member assigned to the first subject, and no students.
pub struct Fixture {
    pub persistence: Persistence,
    pub department_id: i64,
    pub class_id: i64,
    pub subject_ids: Vec<i64>,
    pub faculty_user_id: i64,
    pub faculty_id: i64,
}

pub fn create_user(persistence: &mut Persistence, email: &str, role: Role) -> i64 {
    let hash: String = Persistence::hash_password("password123", TEST_COST).unwrap();
    persistence
        .create_user(email, "Test User", &hash, role)
        .unwrap()
}

pub fn create_fixture() -> Fixture {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let department_id: i64 = persistence.create_department("CSE").unwrap();
    let class_id: i64 = persistence.create_class(department_id, 3, "A").unwrap();
    let subject_ids: Vec<i64> = vec![
        persistence
            .create_subject(department_id, "CSE Core 1", SubjectType::Theory)
            .unwrap(),
        persistence
            .create_subject(department_id, "Library", SubjectType::Library)
            .unwrap(),
    ];

    let faculty_user_id: i64 =
        create_user(&mut persistence, "faculty.cse1@college.edu", Role::Faculty);
    let faculty_id: i64 = persistence
        .create_faculty(faculty_user_id, department_id)
        .unwrap();
    persistence
        .create_faculty_assignment(faculty_id, class_id, subject_ids[0])
        .unwrap();

    Fixture {
        persistence,
        department_id,
        class_id,
        subject_ids,
        faculty_user_id,
        faculty_id,
    }
}

/// Creates a student user and enrolls them in the fixture class.
pub fn enroll_student(fixture: &mut Fixture, email: &str, roll_number: &str) -> i64 {
    let user_id: i64 = create_user(&mut fixture.persistence, email, Role::Student);
    fixture
        .persistence
        .create_student(user_id, fixture.class_id, roll_number)
        .unwrap()
        .student_id
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let mut first: Persistence = Persistence::new_in_memory().unwrap();
    let mut second: Persistence = Persistence::new_in_memory().unwrap();

    first.create_department("ECE").unwrap();

    assert_eq!(first.list_departments().unwrap().len(), 1);
    assert!(second.list_departments().unwrap().is_empty());
}

#[test]
fn test_foreign_keys_enforced() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());

    // No department 999 exists.
    assert!(persistence.create_class(999, 1, "A").is_err());
}
