// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names serialize in camelCase. Nested views mirror the shape the
//! dashboards render: a record carries its subject, a student carries its
//! user account, and so on.

use nodue_domain::{ClearanceStatus, FeeClearance, Role, SubjectType};
use nodue_persistence::{
    ClassData, DepartmentData, FeeStatusData, NoDueRecordData, StudentData, SubjectData, UserData,
};
use serde::{Deserialize, Serialize};

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The account summary returned with a token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginUser {
    pub id: i64,
    pub role: Role,
    pub name: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginResponse {
    /// Bearer token to send as `Authorization: Bearer <token>`.
    pub token: String,
    pub user: LoginUser,
}

/// Global statistics shown on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatsResponse {
    pub total_students: i64,
    pub total_faculty: i64,
    pub departments: i64,
    /// Rounded percentage with a trailing `%`, e.g. `"40%"`.
    pub clearance_rate: String,
}

/// API request to set a no-due record's status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoDueRequest {
    pub record_id: i64,
    /// One of `PENDING`, `APPROVED` or `REJECTED`.
    pub status: String,
}

/// API request to set a student's fee status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeesRequest {
    pub student_id: i64,
    /// One of `PENDING` or `APPROVED`.
    pub status: String,
}

/// Query parameters selecting one subject in one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyStudentsQuery {
    pub class_id: i64,
    pub subject_id: i64,
}

// ============================================================================
// Nested views
// ============================================================================

/// A user account without its password hash.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserView {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<UserData> for UserView {
    fn from(user: UserData) -> Self {
        Self {
            id: user.user_id,
            email: user.email,
            name: user.name,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DepartmentView {
    pub id: i64,
    pub name: String,
}

impl From<DepartmentData> for DepartmentView {
    fn from(department: DepartmentData) -> Self {
        Self {
            id: department.department_id,
            name: department.name,
        }
    }
}

/// A class together with its department.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassView {
    pub id: i64,
    pub year: i32,
    pub section: String,
    pub department_id: i64,
    pub advisor_id: Option<i64>,
    pub department: DepartmentView,
}

impl ClassView {
    #[must_use]
    pub fn new(class: ClassData, department: DepartmentData) -> Self {
        Self {
            id: class.class_id,
            year: class.year,
            section: class.section,
            department_id: class.department_id,
            advisor_id: class.advisor_id,
            department: department.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectView {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    pub department_id: i64,
}

impl From<SubjectData> for SubjectView {
    fn from(subject: SubjectData) -> Self {
        Self {
            id: subject.subject_id,
            name: subject.name,
            subject_type: subject.subject_type,
            department_id: subject.department_id,
        }
    }
}

/// A bare no-due record, as returned by an update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoDueRecordView {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub status: ClearanceStatus,
    pub approved_by: Option<i64>,
    pub updated_at: Option<String>,
}

impl From<NoDueRecordData> for NoDueRecordView {
    fn from(record: NoDueRecordData) -> Self {
        Self {
            id: record.record_id,
            student_id: record.student_id,
            subject_id: record.subject_id,
            status: record.status,
            approved_by: record.approved_by,
            updated_at: record.updated_at,
        }
    }
}

/// A no-due record with its subject, as listed on the student dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubjectRecordView {
    #[serde(flatten)]
    pub record: NoDueRecordView,
    pub subject: SubjectView,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeStatusView {
    pub id: i64,
    pub student_id: i64,
    pub status: FeeClearance,
    pub updated_at: Option<String>,
}

impl From<FeeStatusData> for FeeStatusView {
    fn from(fee: FeeStatusData) -> Self {
        Self {
            id: fee.fee_status_id,
            student_id: fee.student_id,
            status: fee.status,
            updated_at: fee.updated_at,
        }
    }
}

/// A student with its user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub id: i64,
    pub user_id: i64,
    pub class_id: i64,
    pub roll_number: String,
    pub user: UserView,
}

impl StudentView {
    #[must_use]
    pub fn new(student: StudentData, user: UserData) -> Self {
        Self {
            id: student.student_id,
            user_id: student.user_id,
            class_id: student.class_id,
            roll_number: student.roll_number,
            user: user.into(),
        }
    }
}

/// Everything the student dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboardResponse {
    #[serde(flatten)]
    pub student: StudentView,
    pub class: ClassView,
    pub no_due_records: Vec<SubjectRecordView>,
    pub fee_status: Option<FeeStatusView>,
}

/// A teaching assignment with its class and subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentView {
    pub id: i64,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
    pub class: ClassView,
    pub subject: SubjectView,
}

/// Everything the faculty dashboard renders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyDashboardResponse {
    pub id: i64,
    pub user_id: i64,
    pub department_id: i64,
    pub user: UserView,
    pub department: DepartmentView,
    pub assignments: Vec<AssignmentView>,
    /// The class this faculty member advises, if any.
    pub advisor_class: Option<ClassView>,
}

/// A no-due record with its student, as listed for one subject in one class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudentRecordView {
    #[serde(flatten)]
    pub record: NoDueRecordView,
    pub student: StudentView,
}

/// A student with its fee status, as listed for a class advisor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisedStudentView {
    #[serde(flatten)]
    pub student: StudentView,
    pub fee_status: FeeStatusView,
}
