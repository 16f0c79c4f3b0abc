// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Faculty, teaching assignment and student enrollment mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use nodue_domain::{ClearanceStatus, FeeClearance};
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::EnrollmentData;
use crate::diesel_schema::{
    classes, faculty, faculty_assignments, fee_statuses, no_due_records, students, subjects,
};
use crate::error::PersistenceError;

/// Creates the faculty profile for an existing user.
///
/// # Errors
///
/// Returns an error if the insert fails or the user already has a profile.
pub fn create_faculty(
    conn: &mut SqliteConnection,
    user_id: i64,
    department_id: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(faculty::table)
        .values((
            faculty::user_id.eq(user_id),
            faculty::department_id.eq(department_id),
        ))
        .execute(conn)?;

    let faculty_id: i64 = get_last_insert_rowid(conn)?;
    info!(faculty_id, user_id, department_id, "Created faculty");
    Ok(faculty_id)
}

/// Grants a faculty member approval rights over a subject in a class.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_faculty_assignment(
    conn: &mut SqliteConnection,
    faculty_id: i64,
    class_id: i64,
    subject_id: i64,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(faculty_assignments::table)
        .values((
            faculty_assignments::faculty_id.eq(faculty_id),
            faculty_assignments::class_id.eq(class_id),
            faculty_assignments::subject_id.eq(subject_id),
        ))
        .execute(conn)?;

    let assignment_id: i64 = get_last_insert_rowid(conn)?;
    debug!(
        assignment_id,
        faculty_id, class_id, subject_id, "Created faculty assignment"
    );
    Ok(assignment_id)
}

/// Enrolls a student in a class.
///
/// In one transaction this inserts the student row, one `PENDING` no-due
/// record for every subject of the class's department, and one `PENDING`
/// fee status. Either all of them exist afterwards or none do.
///
/// # Errors
///
/// Returns an error if the class does not exist or any insert fails.
pub fn create_student(
    conn: &mut SqliteConnection,
    user_id: i64,
    class_id: i64,
    roll_number: &str,
) -> Result<EnrollmentData, PersistenceError> {
    conn.transaction::<EnrollmentData, PersistenceError, _>(|conn| {
        let department_id: i64 = classes::table
            .find(class_id)
            .select(classes::department_id)
            .first(conn)
            .optional()?
            .ok_or_else(|| PersistenceError::NotFound(format!("Class {class_id}")))?;

        diesel::insert_into(students::table)
            .values((
                students::user_id.eq(user_id),
                students::class_id.eq(class_id),
                students::roll_number.eq(roll_number),
            ))
            .execute(conn)?;
        let student_id: i64 = get_last_insert_rowid(conn)?;

        let subject_ids: Vec<i64> = subjects::table
            .filter(subjects::department_id.eq(department_id))
            .order(subjects::subject_id.asc())
            .select(subjects::subject_id)
            .load(conn)?;

        let records: Vec<_> = subject_ids
            .iter()
            .map(|subject_id| {
                (
                    no_due_records::student_id.eq(student_id),
                    no_due_records::subject_id.eq(*subject_id),
                    no_due_records::status.eq(ClearanceStatus::Pending.as_str()),
                )
            })
            .collect();
        let inserted: usize = if records.is_empty() {
            0
        } else {
            diesel::insert_into(no_due_records::table)
                .values(records)
                .execute(conn)?
        };

        diesel::insert_into(fee_statuses::table)
            .values((
                fee_statuses::student_id.eq(student_id),
                fee_statuses::status.eq(FeeClearance::Pending.as_str()),
            ))
            .execute(conn)?;

        debug!(
            student_id,
            roll_number,
            records = inserted,
            "Enrolled student"
        );

        Ok(EnrollmentData {
            student_id,
            records: inserted,
        })
    })
}
