// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use nodue_domain::{ClearanceStatus, FeeClearance, Role};
use nodue_persistence::{ClassData, DepartmentData, Persistence};

use crate::{SeedConfig, SeedSummary, seed_database, sections_for};

fn test_config(students_per_class: u32) -> SeedConfig {
    SeedConfig {
        students_per_class,
        password: String::from("password123"),
        bcrypt_cost: 4,
    }
}

fn department(persistence: &mut Persistence, name: &str) -> DepartmentData {
    persistence
        .list_departments()
        .unwrap()
        .into_iter()
        .find(|department| department.name == name)
        .unwrap()
}

#[test]
fn test_section_rules() {
    assert_eq!(sections_for("CSE"), &["A", "B"]);
    assert_eq!(sections_for("AIDS"), &["A", "B"]);
    assert_eq!(sections_for("MECH"), &["A"]);
}

#[test]
fn test_summary_counts() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let summary: SeedSummary =
        seed_database(&mut persistence, &test_config(1), || false).unwrap();

    // 6 single-section departments and 3 two-section departments, 4 years each.
    assert_eq!(summary.departments, 9);
    assert_eq!(summary.classes, 6 * 4 + 3 * 8);
    assert_eq!(summary.subjects, 45);
    assert_eq!(summary.faculty, 27);
    assert_eq!(summary.advisors, 0);
    assert_eq!(summary.students, 48);
    assert_eq!(summary.records, 48 * 5);

    let counts = persistence.get_clearance_counts().unwrap();
    assert_eq!(counts.students, 48);
    assert_eq!(counts.faculty, 27);
    assert_eq!(counts.total_records, 240);
    assert_eq!(counts.approved_records, 0);
}

#[test]
fn test_summary_records_match_stored_records() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let summary: SeedSummary =
        seed_database(&mut persistence, &test_config(3), || false).unwrap();

    let counts = persistence.get_clearance_counts().unwrap();
    assert_eq!(
        i64::try_from(summary.records).unwrap(),
        counts.total_records
    );
}

#[test]
fn test_cse_students_start_fully_pending() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    seed_database(&mut persistence, &test_config(5), || false).unwrap();

    let cse: DepartmentData = department(&mut persistence, "CSE");
    let classes: Vec<ClassData> = persistence
        .list_classes_for_department(cse.department_id)
        .unwrap();
    assert_eq!(classes.len(), 8);

    let mut students: usize = 0;
    for class in &classes {
        for (student, _user, fee) in persistence.list_students_with_fees(class.class_id).unwrap() {
            students += 1;
            assert_eq!(fee.status, FeeClearance::Pending);

            let records = persistence
                .list_records_for_student(student.student_id)
                .unwrap();
            assert_eq!(records.len(), 5);
            assert!(
                records
                    .iter()
                    .all(|(record, _)| record.status == ClearanceStatus::Pending)
            );
        }
    }
    assert_eq!(students, 40);
}

#[test]
fn test_always_accepting_coin_appoints_first_faculty_to_first_class() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();

    let summary: SeedSummary =
        seed_database(&mut persistence, &test_config(0), || true).unwrap();

    // Each faculty member takes the first class still without an advisor.
    assert_eq!(summary.advisors, 27);

    let cse: DepartmentData = department(&mut persistence, "CSE");
    let classes: Vec<ClassData> = persistence
        .list_classes_for_department(cse.department_id)
        .unwrap();
    let advised: Vec<Option<i64>> = classes.iter().map(|class| class.advisor_id).collect();
    assert_eq!(advised.iter().filter(|advisor| advisor.is_some()).count(), 3);

    let faculty = persistence
        .list_faculty_for_department(cse.department_id)
        .unwrap();
    for member in &faculty {
        assert_eq!(
            advised
                .iter()
                .filter(|advisor| **advisor == Some(member.faculty_id))
                .count(),
            1
        );
    }
}

#[test]
fn test_coin_only_asked_for_eligible_pairs() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let mut flips: usize = 0;

    seed_database(&mut persistence, &test_config(0), || {
        flips += 1;
        true
    })
    .unwrap();

    // Accepting on the first flip makes every faculty member ineligible
    // for the rest of their classes.
    assert_eq!(flips, 27);
}

#[test]
fn test_round_robin_subject_assignment() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    seed_database(&mut persistence, &test_config(0), || false).unwrap();

    let ece: DepartmentData = department(&mut persistence, "ECE");
    let subjects = persistence
        .list_subjects_for_department(ece.department_id)
        .unwrap();
    let faculty = persistence
        .list_faculty_for_department(ece.department_id)
        .unwrap();

    for (index, member) in faculty.iter().enumerate() {
        let assignments = persistence
            .list_assignments_for_faculty(member.faculty_id)
            .unwrap();
        assert_eq!(assignments.len(), 8);

        let expected_subject: i64 = subjects[(index + 1) % subjects.len()].subject_id;
        assert!(
            assignments
                .iter()
                .all(|(_, _, _, subject)| subject.subject_id == expected_subject)
        );
    }
}

#[test]
fn test_reseeding_replaces_previous_data() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    seed_database(&mut persistence, &test_config(2), || false).unwrap();

    seed_database(&mut persistence, &test_config(1), || false).unwrap();

    assert_eq!(persistence.get_clearance_counts().unwrap().students, 48);
    assert_eq!(persistence.list_departments().unwrap().len(), 9);
}

#[test]
fn test_seeded_accounts_share_password() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    seed_database(&mut persistence, &test_config(1), || false).unwrap();

    let admin = persistence
        .get_user_by_email("admin@college.edu")
        .unwrap()
        .unwrap();
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(admin.name, "Super Admin");
    assert!(Persistence::verify_password("password123", &admin.password_hash).unwrap());

    let student = persistence
        .get_user_by_email("student.cse4B1@college.edu")
        .unwrap()
        .unwrap();
    assert_eq!(student.name, "Student CSE 1");
    let profile = persistence
        .get_student_by_user_id(student.user_id)
        .unwrap()
        .unwrap();
    assert_eq!(profile.roll_number, "CSE-4-B-1");
}
