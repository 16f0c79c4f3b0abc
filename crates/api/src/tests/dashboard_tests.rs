// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nodue_domain::{ClearanceStatus, FeeClearance, Role};

use super::helpers::{Campus, create_campus};
use crate::{
    AdminStatsResponse, ApiError, AuthenticatedActor, FacultyDashboardResponse,
    FacultyStudentsQuery, StudentDashboardResponse, admin_stats, advisor_students,
    faculty_dashboard, faculty_students, student_dashboard,
};

#[test]
fn test_admin_stats_with_no_records_is_zero_percent() {
    let mut persistence = nodue_persistence::Persistence::new_in_memory().unwrap();
    let admin: AuthenticatedActor = AuthenticatedActor::new(1, Role::Admin);

    let stats: AdminStatsResponse = admin_stats(&mut persistence, &admin).unwrap();

    assert_eq!(stats.total_students, 0);
    assert_eq!(stats.clearance_rate, "0%");
}

#[test]
fn test_admin_stats_counts_and_rate() {
    let mut campus: Campus = create_campus();
    let record_id: i64 = campus
        .persistence
        .list_records_for_student(campus.student_id)
        .unwrap()[0]
        .0
        .record_id;
    campus
        .persistence
        .update_no_due_status(record_id, ClearanceStatus::Approved, campus.advisor.user_id)
        .unwrap();

    let stats: AdminStatsResponse = admin_stats(&mut campus.persistence, &campus.admin).unwrap();

    assert_eq!(stats.total_students, 1);
    assert_eq!(stats.total_faculty, 2);
    assert_eq!(stats.departments, 1);
    assert_eq!(stats.clearance_rate, "50%");
}

#[test]
fn test_admin_stats_requires_admin() {
    let mut campus: Campus = create_campus();

    let result = admin_stats(&mut campus.persistence, &campus.advisor);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_student_dashboard_lists_pending_records() {
    let mut campus: Campus = create_campus();

    let dashboard: StudentDashboardResponse =
        student_dashboard(&mut campus.persistence, &campus.student).unwrap();

    assert_eq!(dashboard.student.roll_number, "CSE-2-B-1");
    assert_eq!(dashboard.student.user.email, "student.cse2b1@college.edu");
    assert_eq!(dashboard.class.department.name, "CSE");
    assert_eq!(dashboard.class.section, "B");
    assert_eq!(dashboard.no_due_records.len(), campus.subject_ids.len());
    assert!(
        dashboard
            .no_due_records
            .iter()
            .all(|entry| entry.record.status == ClearanceStatus::Pending)
    );
    assert_eq!(
        dashboard.fee_status.map(|fee| fee.status),
        Some(FeeClearance::Pending)
    );
}

#[test]
fn test_student_dashboard_serializes_camel_case() {
    let mut campus: Campus = create_campus();

    let dashboard: StudentDashboardResponse =
        student_dashboard(&mut campus.persistence, &campus.student).unwrap();
    let json: serde_json::Value = serde_json::to_value(&dashboard).unwrap();

    assert_eq!(json["rollNumber"], "CSE-2-B-1");
    assert_eq!(json["class"]["department"]["name"], "CSE");
    assert_eq!(json["noDueRecords"][0]["status"], "PENDING");
    assert_eq!(json["noDueRecords"][0]["subject"]["type"], "THEORY");
    assert_eq!(json["feeStatus"]["status"], "PENDING");
    assert!(json["user"].get("passwordHash").is_none());
}

#[test]
fn test_student_dashboard_without_profile_is_not_found() {
    let mut campus: Campus = create_campus();
    let orphan: AuthenticatedActor = AuthenticatedActor::new(9_999, Role::Student);

    let result = student_dashboard(&mut campus.persistence, &orphan);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_faculty_dashboard_includes_assignments_and_advised_class() {
    let mut campus: Campus = create_campus();

    let dashboard: FacultyDashboardResponse =
        faculty_dashboard(&mut campus.persistence, &campus.advisor).unwrap();

    assert_eq!(dashboard.user.name, "Prof. CSE 1");
    assert_eq!(dashboard.department.name, "CSE");
    assert_eq!(dashboard.assignments.len(), 1);
    assert_eq!(dashboard.assignments[0].subject.id, campus.subject_ids[0]);
    assert_eq!(dashboard.assignments[0].class.department.name, "CSE");
    assert_eq!(
        dashboard.advisor_class.map(|class| class.id),
        Some(campus.class_id)
    );
}

#[test]
fn test_faculty_dashboard_for_student_is_forbidden() {
    let mut campus: Campus = create_campus();

    let result = faculty_dashboard(&mut campus.persistence, &campus.student);

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[test]
fn test_faculty_dashboard_without_profile_is_not_found() {
    let mut campus: Campus = create_campus();
    let orphan: AuthenticatedActor = AuthenticatedActor::new(9_999, Role::Faculty);

    let result = faculty_dashboard(&mut campus.persistence, &orphan);

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_faculty_students_for_subject() {
    let mut campus: Campus = create_campus();

    let rows = faculty_students(
        &mut campus.persistence,
        &campus.lecturer,
        FacultyStudentsQuery {
            class_id: campus.class_id,
            subject_id: campus.subject_ids[1],
        },
    )
    .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.subject_id, campus.subject_ids[1]);
    assert_eq!(rows[0].student.id, campus.student_id);
    assert_eq!(rows[0].student.user.name, "Student CSE 1");
}

#[test]
fn test_advisor_students_lists_fee_status() {
    let mut campus: Campus = create_campus();

    let students = advisor_students(&mut campus.persistence, &campus.advisor).unwrap();

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].student.id, campus.student_id);
    assert_eq!(students[0].fee_status.status, FeeClearance::Pending);
}

#[test]
fn test_non_advisor_is_forbidden_from_advisor_students() {
    let mut campus: Campus = create_campus();

    let result = advisor_students(&mut campus.persistence, &campus.lecturer);

    assert_eq!(
        result,
        Err(ApiError::Forbidden {
            reason: String::from("Not an advisor"),
        })
    );
}
