// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler checks the caller's role, issues one logical query or
//! mutation against the persistence handle it is given, and shapes the
//! result into a response DTO. Handlers are synchronous and know nothing
//! about HTTP.

use nodue_domain::{ClearanceRate, ClearanceStatus, FeeClearance, Role, clearance_rate};
use nodue_persistence::{
    AssignmentDetail, ClassData, ClearanceCounts, DepartmentData, FacultyData, FeeStatusData,
    NoDueRecordData, Persistence, PersistenceError, StudentData, UserData,
};
use tracing::info;

use crate::auth::{AuthenticatedActor, AuthenticationService, AuthorizationService, TokenService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AdminStatsResponse, AdvisedStudentView, AssignmentView, ClassView, FacultyDashboardResponse,
    FacultyStudentsQuery, FeeStatusView, LoginRequest, LoginResponse, LoginUser, NoDueRecordView,
    StudentDashboardResponse, StudentRecordView, StudentView, SubjectRecordView,
    UpdateFeesRequest, UpdateNoDueRequest,
};

/// Maps any persistence failure to an internal error.
fn internal(err: PersistenceError) -> ApiError {
    ApiError::Internal {
        message: err.to_string(),
    }
}

fn not_found(resource_type: &str, message: String) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: resource_type.to_string(),
        message,
    }
}

/// Loads the user behind an authenticated actor.
fn load_user(persistence: &mut Persistence, user_id: i64) -> Result<UserData, ApiError> {
    persistence
        .get_user_by_id(user_id)
        .map_err(internal)?
        .ok_or_else(|| not_found("User", format!("User {user_id} does not exist")))
}

/// Loads the faculty profile behind an authenticated actor.
fn load_faculty(persistence: &mut Persistence, user_id: i64) -> Result<FacultyData, ApiError> {
    persistence
        .get_faculty_by_user_id(user_id)
        .map_err(internal)?
        .ok_or_else(|| not_found("Faculty", format!("No faculty profile for user {user_id}")))
}

/// Authenticates an email and password.
///
/// # Errors
///
/// Returns an error if the credentials are invalid.
pub fn login(
    persistence: &mut Persistence,
    tokens: &TokenService,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (token, actor, user): (String, AuthenticatedActor, UserData) =
        AuthenticationService::login(persistence, tokens, &request.email, &request.password)?;

    info!(user_id = actor.user_id, role = %actor.role, "User logged in");

    Ok(LoginResponse {
        token,
        user: LoginUser {
            id: user.user_id,
            role: user.role,
            name: user.name,
        },
    })
}

/// Computes the admin statistics panel.
///
/// # Errors
///
/// Returns an error if the actor is not an admin or a count fails.
pub fn admin_stats(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<AdminStatsResponse, ApiError> {
    AuthorizationService::require_role(actor, Role::Admin, "admin_stats")?;

    let counts: ClearanceCounts = persistence.get_clearance_counts().map_err(internal)?;
    let rate: ClearanceRate = clearance_rate(counts.approved_records, counts.total_records);

    Ok(AdminStatsResponse {
        total_students: counts.students,
        total_faculty: counts.faculty,
        departments: counts.departments,
        clearance_rate: rate.to_string(),
    })
}

/// Loads the calling student's record, class, dues and fee status.
///
/// # Errors
///
/// Returns an error if the actor is not a student or has no student profile.
pub fn student_dashboard(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<StudentDashboardResponse, ApiError> {
    AuthorizationService::require_role(actor, Role::Student, "student_dashboard")?;

    let student: StudentData = persistence
        .get_student_by_user_id(actor.user_id)
        .map_err(internal)?
        .ok_or_else(|| {
            not_found(
                "Student",
                format!("No student profile for user {}", actor.user_id),
            )
        })?;
    let user: UserData = load_user(persistence, actor.user_id)?;

    let (class, department): (ClassData, DepartmentData) = persistence
        .get_class_with_department(student.class_id)
        .map_err(internal)?
        .ok_or_else(|| ApiError::Internal {
            message: format!(
                "Student {} references missing class {}",
                student.student_id, student.class_id
            ),
        })?;

    let no_due_records: Vec<SubjectRecordView> = persistence
        .list_records_for_student(student.student_id)
        .map_err(internal)?
        .into_iter()
        .map(|(record, subject)| SubjectRecordView {
            record: record.into(),
            subject: subject.into(),
        })
        .collect();

    let fee_status: Option<FeeStatusView> = persistence
        .get_fee_status_for_student(student.student_id)
        .map_err(internal)?
        .map(FeeStatusView::from);

    Ok(StudentDashboardResponse {
        student: StudentView::new(student, user),
        class: ClassView::new(class, department),
        no_due_records,
        fee_status,
    })
}

/// Loads the calling faculty member's profile, assignments and advised class.
///
/// # Errors
///
/// Returns an error if the actor is not faculty or has no faculty profile.
pub fn faculty_dashboard(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<FacultyDashboardResponse, ApiError> {
    AuthorizationService::require_role(actor, Role::Faculty, "faculty_dashboard")?;

    let faculty: FacultyData = load_faculty(persistence, actor.user_id)?;
    let user: UserData = load_user(persistence, actor.user_id)?;

    let department: DepartmentData = persistence
        .get_department(faculty.department_id)
        .map_err(internal)?
        .ok_or_else(|| ApiError::Internal {
            message: format!(
                "Faculty {} references missing department {}",
                faculty.faculty_id, faculty.department_id
            ),
        })?;

    let assignments: Vec<AssignmentDetail> = persistence
        .list_assignments_for_faculty(faculty.faculty_id)
        .map_err(internal)?;
    let assignments: Vec<AssignmentView> = assignments
        .into_iter()
        .map(|(assignment, class, class_department, subject)| AssignmentView {
            id: assignment.assignment_id,
            faculty_id: assignment.faculty_id,
            class_id: assignment.class_id,
            subject_id: assignment.subject_id,
            class: ClassView::new(class, class_department),
            subject: subject.into(),
        })
        .collect();

    let advisor_class: Option<ClassView> = persistence
        .get_advisor_class(faculty.faculty_id)
        .map_err(internal)?
        .map(|(class, class_department)| ClassView::new(class, class_department));

    Ok(FacultyDashboardResponse {
        id: faculty.faculty_id,
        user_id: faculty.user_id,
        department_id: faculty.department_id,
        user: user.into(),
        department: department.into(),
        assignments,
        advisor_class,
    })
}

/// Lists the no-due records of one subject for the students of one class.
///
/// The caller must be faculty; assignment to the class and subject is not
/// checked.
///
/// # Errors
///
/// Returns an error if the actor is not faculty or the query fails.
pub fn faculty_students(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    query: FacultyStudentsQuery,
) -> Result<Vec<StudentRecordView>, ApiError> {
    AuthorizationService::require_role(actor, Role::Faculty, "faculty_students")?;

    let rows: Vec<(NoDueRecordData, StudentData, UserData)> = persistence
        .list_records_for_class_subject(query.class_id, query.subject_id)
        .map_err(internal)?;

    Ok(rows
        .into_iter()
        .map(|(record, student, user)| StudentRecordView {
            record: record.into(),
            student: StudentView::new(student, user),
        })
        .collect())
}

/// Lists the students of the class the caller advises, with fee status.
///
/// # Errors
///
/// Returns `Forbidden` if the caller advises no class.
pub fn advisor_students(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
) -> Result<Vec<AdvisedStudentView>, ApiError> {
    AuthorizationService::require_role(actor, Role::Faculty, "advisor_students")?;

    let faculty: FacultyData = load_faculty(persistence, actor.user_id)?;
    let (class, _department): (ClassData, DepartmentData) = persistence
        .get_advisor_class(faculty.faculty_id)
        .map_err(internal)?
        .ok_or_else(|| ApiError::Forbidden {
            reason: String::from("Not an advisor"),
        })?;

    let rows: Vec<(StudentData, UserData, FeeStatusData)> = persistence
        .list_students_with_fees(class.class_id)
        .map_err(internal)?;

    Ok(rows
        .into_iter()
        .map(|(student, user, fee)| AdvisedStudentView {
            student: StudentView::new(student, user),
            fee_status: fee.into(),
        })
        .collect())
}

/// Sets a no-due record's status on behalf of the calling faculty member.
///
/// # Errors
///
/// Returns an error if the actor is not faculty, the status is unknown, or
/// the record does not exist.
pub fn update_no_due(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &UpdateNoDueRequest,
) -> Result<NoDueRecordView, ApiError> {
    AuthorizationService::require_role(actor, Role::Faculty, "update_no_due")?;

    let status: ClearanceStatus =
        ClearanceStatus::parse(&request.status).map_err(translate_domain_error)?;

    let record: NoDueRecordData = persistence
        .update_no_due_status(request.record_id, status, actor.user_id)
        .map_err(|e| translate_persistence_error(e, "No-due record"))?;

    info!(
        record_id = record.record_id,
        status = %record.status,
        user_id = actor.user_id,
        "No-due status changed"
    );

    Ok(record.into())
}

/// Sets a student's fee status.
///
/// # Errors
///
/// Returns an error if the actor is not faculty, the status is not a fee
/// status, or the student has no fee status.
pub fn update_fees(
    persistence: &mut Persistence,
    actor: &AuthenticatedActor,
    request: &UpdateFeesRequest,
) -> Result<FeeStatusView, ApiError> {
    AuthorizationService::require_role(actor, Role::Faculty, "update_fees")?;

    let status: FeeClearance =
        FeeClearance::parse(&request.status).map_err(translate_domain_error)?;

    let fee: FeeStatusData = persistence
        .update_fee_status(request.student_id, status)
        .map_err(|e| translate_persistence_error(e, "Fee status"))?;

    info!(
        student_id = fee.student_id,
        status = %fee.status,
        user_id = actor.user_id,
        "Fee status changed"
    );

    Ok(fee.into())
}
