// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! No-due and fee status updates.
//!
//! Both updates are single unguarded statements: the last writer wins and
//! no version check is performed.

use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel::sql_types::{Nullable, Text};
use nodue_domain::{ClearanceStatus, FeeClearance};
use tracing::info;

use crate::data_models::{FeeStatusData, FeeStatusRow, NoDueRecordData, NoDueRecordRow};
use crate::diesel_schema::{fee_statuses, no_due_records};
use crate::error::PersistenceError;

/// Sets the status of a no-due record and records who changed it.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `record_id` - The record to update
/// * `status` - The new status
/// * `acting_user_id` - User id of the faculty member making the change
///
/// # Errors
///
/// Returns `NotFound` if the record does not exist.
pub fn update_no_due_status(
    conn: &mut SqliteConnection,
    record_id: i64,
    status: ClearanceStatus,
    acting_user_id: i64,
) -> Result<NoDueRecordData, PersistenceError> {
    let row: Option<NoDueRecordRow> = diesel::update(no_due_records::table.find(record_id))
        .set((
            no_due_records::status.eq(status.as_str()),
            no_due_records::approved_by.eq(Some(acting_user_id)),
            no_due_records::updated_at.eq(diesel::dsl::sql::<Nullable<Text>>("CURRENT_TIMESTAMP")),
        ))
        .returning(NoDueRecordRow::as_returning())
        .get_result(conn)
        .optional()?;

    let record: NoDueRecordData = row
        .ok_or_else(|| PersistenceError::NotFound(format!("No-due record {record_id}")))?
        .try_into()?;

    info!(
        record_id,
        status = %status,
        approved_by = acting_user_id,
        "Updated no-due record"
    );

    Ok(record)
}

/// Sets the fee status of a student.
///
/// # Errors
///
/// Returns `NotFound` if the student has no fee status row.
pub fn update_fee_status(
    conn: &mut SqliteConnection,
    student_id: i64,
    status: FeeClearance,
) -> Result<FeeStatusData, PersistenceError> {
    let row: Option<FeeStatusRow> = diesel::update(
        fee_statuses::table.filter(fee_statuses::student_id.eq(student_id)),
    )
    .set((
        fee_statuses::status.eq(status.as_str()),
        fee_statuses::updated_at.eq(diesel::dsl::sql::<Nullable<Text>>("CURRENT_TIMESTAMP")),
    ))
    .returning(FeeStatusRow::as_returning())
    .get_result(conn)
    .optional()?;

    let fee: FeeStatusData = row
        .ok_or_else(|| PersistenceError::NotFound(format!("Fee status for student {student_id}")))?
        .try_into()?;

    info!(student_id, status = %status, "Updated fee status");

    Ok(fee)
}
