// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types read from the database and the typed data handed to callers.
//!
//! Row structs mirror the table layout exactly and are private to the crate.
//! Each converts into a `*Data` type whose enum columns have been parsed into
//! their domain types.

use diesel::prelude::*;
use nodue_domain::{ClearanceStatus, FeeClearance, Role, SubjectType};

use crate::diesel_schema::{
    classes, departments, faculty, faculty_assignments, fee_statuses, no_due_records, students,
    subjects, users,
};
use crate::error::PersistenceError;

/// A provisioned login account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Role,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentData {
    pub department_id: i64,
    pub name: String,
}

/// A year/section cohort inside a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassData {
    pub class_id: i64,
    pub department_id: i64,
    pub year: i32,
    pub section: String,
    /// The advising faculty id, if one has been appointed.
    pub advisor_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectData {
    pub subject_id: i64,
    pub department_id: i64,
    pub name: String,
    pub subject_type: SubjectType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyData {
    pub faculty_id: i64,
    pub user_id: i64,
    pub department_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentData {
    pub student_id: i64,
    pub user_id: i64,
    pub class_id: i64,
    pub roll_number: String,
}

/// What enrolling a student created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentData {
    pub student_id: i64,
    /// Pending no-due records inserted, one per department subject.
    pub records: usize,
}

/// Grants a faculty member approval rights over one subject in one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyAssignmentData {
    pub assignment_id: i64,
    pub faculty_id: i64,
    pub class_id: i64,
    pub subject_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoDueRecordData {
    pub record_id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub status: ClearanceStatus,
    /// User id of the last faculty member who changed the status.
    pub approved_by: Option<i64>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeStatusData {
    pub fee_status_id: i64,
    pub student_id: i64,
    pub status: FeeClearance,
    pub updated_at: Option<String>,
}

/// Row counts behind the admin statistics panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearanceCounts {
    pub students: i64,
    pub faculty: i64,
    pub departments: i64,
    pub approved_records: i64,
    pub total_records: i64,
}

// ============================================================================
// Row structs
// ============================================================================

#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct UserRow {
    user_id: i64,
    email: String,
    password_hash: String,
    name: String,
    role: String,
    created_at: String,
}

impl TryFrom<UserRow> for UserData {
    type Error = PersistenceError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.user_id,
            email: row.email,
            password_hash: row.password_hash,
            name: row.name,
            role: Role::parse(&row.role)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct DepartmentRow {
    department_id: i64,
    name: String,
}

impl From<DepartmentRow> for DepartmentData {
    fn from(row: DepartmentRow) -> Self {
        Self {
            department_id: row.department_id,
            name: row.name,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = classes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ClassRow {
    class_id: i64,
    department_id: i64,
    year: i32,
    section: String,
    advisor_id: Option<i64>,
}

impl From<ClassRow> for ClassData {
    fn from(row: ClassRow) -> Self {
        Self {
            class_id: row.class_id,
            department_id: row.department_id,
            year: row.year,
            section: row.section,
            advisor_id: row.advisor_id,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = subjects)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct SubjectRow {
    subject_id: i64,
    department_id: i64,
    name: String,
    subject_type: String,
}

impl TryFrom<SubjectRow> for SubjectData {
    type Error = PersistenceError;

    fn try_from(row: SubjectRow) -> Result<Self, Self::Error> {
        Ok(Self {
            subject_id: row.subject_id,
            department_id: row.department_id,
            name: row.name,
            subject_type: SubjectType::parse(&row.subject_type)?,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = faculty)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct FacultyRow {
    faculty_id: i64,
    user_id: i64,
    department_id: i64,
}

impl From<FacultyRow> for FacultyData {
    fn from(row: FacultyRow) -> Self {
        Self {
            faculty_id: row.faculty_id,
            user_id: row.user_id,
            department_id: row.department_id,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct StudentRow {
    student_id: i64,
    user_id: i64,
    class_id: i64,
    roll_number: String,
}

impl From<StudentRow> for StudentData {
    fn from(row: StudentRow) -> Self {
        Self {
            student_id: row.student_id,
            user_id: row.user_id,
            class_id: row.class_id,
            roll_number: row.roll_number,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = faculty_assignments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct FacultyAssignmentRow {
    assignment_id: i64,
    faculty_id: i64,
    class_id: i64,
    subject_id: i64,
}

impl From<FacultyAssignmentRow> for FacultyAssignmentData {
    fn from(row: FacultyAssignmentRow) -> Self {
        Self {
            assignment_id: row.assignment_id,
            faculty_id: row.faculty_id,
            class_id: row.class_id,
            subject_id: row.subject_id,
        }
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = no_due_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct NoDueRecordRow {
    record_id: i64,
    student_id: i64,
    subject_id: i64,
    status: String,
    approved_by: Option<i64>,
    updated_at: Option<String>,
}

impl TryFrom<NoDueRecordRow> for NoDueRecordData {
    type Error = PersistenceError;

    fn try_from(row: NoDueRecordRow) -> Result<Self, Self::Error> {
        Ok(Self {
            record_id: row.record_id,
            student_id: row.student_id,
            subject_id: row.subject_id,
            status: ClearanceStatus::parse(&row.status)?,
            approved_by: row.approved_by,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = fee_statuses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct FeeStatusRow {
    fee_status_id: i64,
    student_id: i64,
    status: String,
    updated_at: Option<String>,
}

impl TryFrom<FeeStatusRow> for FeeStatusData {
    type Error = PersistenceError;

    fn try_from(row: FeeStatusRow) -> Result<Self, Self::Error> {
        Ok(Self {
            fee_status_id: row.fee_status_id,
            student_id: row.student_id,
            status: FeeClearance::parse(&row.status)?,
            updated_at: row.updated_at,
        })
    }
}
