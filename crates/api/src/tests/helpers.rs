// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for API tests.

use nodue_domain::{Role, SubjectType};
use nodue_persistence::Persistence;
use time::Duration;

use crate::{AuthenticatedActor, TokenService};

pub const PASSWORD: &str = "password123";

/// A department with one advised class, two subjects, one assigned
/// faculty member who advises the class, one faculty member who advises
/// nothing, one enrolled student and one admin.
pub struct Campus {
    pub persistence: Persistence,
    pub class_id: i64,
    pub subject_ids: Vec<i64>,
    pub admin: AuthenticatedActor,
    pub advisor: AuthenticatedActor,
    pub lecturer: AuthenticatedActor,
    pub student: AuthenticatedActor,
    pub student_id: i64,
}

pub fn create_token_service() -> TokenService {
    TokenService::new("test-secret", Duration::hours(1))
}

fn create_user(persistence: &mut Persistence, email: &str, name: &str, role: Role) -> i64 {
    let hash: String = Persistence::hash_password(PASSWORD, 4).unwrap();
    persistence.create_user(email, name, &hash, role).unwrap()
}

pub fn create_campus() -> Campus {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let department_id: i64 = persistence.create_department("CSE").unwrap();
    let class_id: i64 = persistence.create_class(department_id, 2, "B").unwrap();
    let subject_ids: Vec<i64> = vec![
        persistence
            .create_subject(department_id, "CSE Core 1", SubjectType::Theory)
            .unwrap(),
        persistence
            .create_subject(department_id, "CSE Lab", SubjectType::Lab)
            .unwrap(),
    ];

    let admin_user: i64 = create_user(
        &mut persistence,
        "admin@college.edu",
        "Super Admin",
        Role::Admin,
    );

    let advisor_user: i64 = create_user(
        &mut persistence,
        "faculty.cse1@college.edu",
        "Prof. CSE 1",
        Role::Faculty,
    );
    let advisor_faculty: i64 = persistence
        .create_faculty(advisor_user, department_id)
        .unwrap();
    persistence
        .set_class_advisor(class_id, advisor_faculty)
        .unwrap();
    persistence
        .create_faculty_assignment(advisor_faculty, class_id, subject_ids[0])
        .unwrap();

    let lecturer_user: i64 = create_user(
        &mut persistence,
        "faculty.cse2@college.edu",
        "Prof. CSE 2",
        Role::Faculty,
    );
    persistence
        .create_faculty(lecturer_user, department_id)
        .unwrap();

    let student_user: i64 = create_user(
        &mut persistence,
        "student.cse2b1@college.edu",
        "Student CSE 1",
        Role::Student,
    );
    let student_id: i64 = persistence
        .create_student(student_user, class_id, "CSE-2-B-1")
        .unwrap()
        .student_id;

    Campus {
        persistence,
        class_id,
        subject_ids,
        admin: AuthenticatedActor::new(admin_user, Role::Admin),
        advisor: AuthenticatedActor::new(advisor_user, Role::Faculty),
        lecturer: AuthenticatedActor::new(lecturer_user, Role::Faculty),
        student: AuthenticatedActor::new(student_user, Role::Student),
        student_id,
    }
}
