// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::info;

use crate::diesel_schema::{
    classes, departments, faculty, faculty_assignments, fee_statuses, no_due_records, students,
    subjects, users,
};
use crate::error::PersistenceError;

/// Deletes every row from every table, children before parents.
///
/// Returns the total number of rows removed.
///
/// # Errors
///
/// Returns an error if any delete fails.
pub fn wipe_all(conn: &mut SqliteConnection) -> Result<usize, PersistenceError> {
    let mut removed: usize = 0;

    removed += diesel::delete(no_due_records::table).execute(conn)?;
    removed += diesel::delete(fee_statuses::table).execute(conn)?;
    removed += diesel::delete(faculty_assignments::table).execute(conn)?;
    removed += diesel::delete(students::table).execute(conn)?;
    removed += diesel::delete(classes::table).execute(conn)?;
    removed += diesel::delete(subjects::table).execute(conn)?;
    removed += diesel::delete(faculty::table).execute(conn)?;
    removed += diesel::delete(departments::table).execute(conn)?;
    removed += diesel::delete(users::table).execute(conn)?;

    info!(removed, "Wiped all clearance data");
    Ok(removed)
}
