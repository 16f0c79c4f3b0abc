// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! No-due record and fee status queries, plus the admin counters.

use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel::SqliteConnection;
use nodue_domain::ClearanceStatus;
use tracing::debug;

use crate::data_models::{
    ClearanceCounts, FeeStatusData, FeeStatusRow, NoDueRecordData, NoDueRecordRow, StudentData,
    StudentRow, SubjectData, SubjectRow, UserData, UserRow,
};
use crate::diesel_schema::{
    departments, faculty, fee_statuses, no_due_records, students, subjects, users,
};
use crate::error::PersistenceError;

/// Retrieves a single no-due record.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_no_due_record(
    conn: &mut SqliteConnection,
    record_id: i64,
) -> Result<Option<NoDueRecordData>, PersistenceError> {
    no_due_records::table
        .find(record_id)
        .select(NoDueRecordRow::as_select())
        .first(conn)
        .optional()?
        .map(NoDueRecordData::try_from)
        .transpose()
}

/// Lists a student's no-due records with the subject each one covers.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_records_for_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Vec<(NoDueRecordData, SubjectData)>, PersistenceError> {
    debug!("Listing no-due records for student ID: {}", student_id);

    let rows: Vec<(NoDueRecordRow, SubjectRow)> = no_due_records::table
        .inner_join(subjects::table)
        .filter(no_due_records::student_id.eq(student_id))
        .order(no_due_records::subject_id.asc())
        .select((NoDueRecordRow::as_select(), SubjectRow::as_select()))
        .load(conn)?;

    rows.into_iter()
        .map(|(record, subject)| {
            Ok((
                NoDueRecordData::try_from(record)?,
                SubjectData::try_from(subject)?,
            ))
        })
        .collect()
}

/// Lists the no-due records for one subject across the students of one class.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_records_for_class_subject(
    conn: &mut SqliteConnection,
    class_id: i64,
    subject_id: i64,
) -> Result<Vec<(NoDueRecordData, StudentData, UserData)>, PersistenceError> {
    debug!(
        "Listing no-due records for class ID {} and subject ID {}",
        class_id, subject_id
    );

    let rows: Vec<(NoDueRecordRow, StudentRow, UserRow)> = no_due_records::table
        .inner_join(students::table.inner_join(users::table))
        .filter(no_due_records::subject_id.eq(subject_id))
        .filter(students::class_id.eq(class_id))
        .order(students::student_id.asc())
        .select((
            NoDueRecordRow::as_select(),
            StudentRow::as_select(),
            UserRow::as_select(),
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|(record, student, user)| {
            Ok((
                NoDueRecordData::try_from(record)?,
                student.into(),
                UserData::try_from(user)?,
            ))
        })
        .collect()
}

/// Retrieves the fee status of a student.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_fee_status_for_student(
    conn: &mut SqliteConnection,
    student_id: i64,
) -> Result<Option<FeeStatusData>, PersistenceError> {
    fee_statuses::table
        .filter(fee_statuses::student_id.eq(student_id))
        .select(FeeStatusRow::as_select())
        .first(conn)
        .optional()?
        .map(FeeStatusData::try_from)
        .transpose()
}

/// Counts the rows behind the admin statistics panel.
///
/// Each count is an independent statement; no snapshot isolation is
/// requested across them.
///
/// # Errors
///
/// Returns an error if any count query fails.
pub fn get_clearance_counts(
    conn: &mut SqliteConnection,
) -> Result<ClearanceCounts, PersistenceError> {
    let student_count: i64 = students::table.select(count_star()).first(conn)?;
    let faculty_count: i64 = faculty::table.select(count_star()).first(conn)?;
    let department_count: i64 = departments::table.select(count_star()).first(conn)?;
    let approved_records: i64 = no_due_records::table
        .filter(no_due_records::status.eq(ClearanceStatus::Approved.as_str()))
        .select(count_star())
        .first(conn)?;
    let total_records: i64 = no_due_records::table.select(count_star()).first(conn)?;

    Ok(ClearanceCounts {
        students: student_count,
        faculty: faculty_count,
        departments: department_count,
        approved_records,
        total_records,
    })
}
