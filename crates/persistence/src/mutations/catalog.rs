// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use nodue_domain::SubjectType;
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{classes, departments, subjects};
use crate::error::PersistenceError;

/// Creates a department.
///
/// # Errors
///
/// Returns an error if the insert fails or the name already exists.
pub fn create_department(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(departments::table)
        .values(departments::name.eq(name))
        .execute(conn)?;

    let department_id: i64 = get_last_insert_rowid(conn)?;
    info!(department_id, name, "Created department");
    Ok(department_id)
}

/// Creates a class with no advisor.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_class(
    conn: &mut SqliteConnection,
    department_id: i64,
    year: i32,
    section: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(classes::table)
        .values((
            classes::department_id.eq(department_id),
            classes::year.eq(year),
            classes::section.eq(section),
        ))
        .execute(conn)?;

    let class_id: i64 = get_last_insert_rowid(conn)?;
    debug!(class_id, department_id, year, section, "Created class");
    Ok(class_id)
}

/// Appoints a faculty member as advisor of a class.
///
/// Only a class without an advisor is updated, so an existing appointment
/// is never silently replaced. The unique index on `advisor_id` rejects a
/// faculty member who already advises another class.
///
/// # Errors
///
/// Returns `NotFound` if the class does not exist or already has an
/// advisor, and a database error if the faculty member advises elsewhere.
pub fn set_class_advisor(
    conn: &mut SqliteConnection,
    class_id: i64,
    faculty_id: i64,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(classes::table)
        .filter(classes::class_id.eq(class_id))
        .filter(classes::advisor_id.is_null())
        .set(classes::advisor_id.eq(Some(faculty_id)))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Class {class_id} without an advisor"
        )));
    }

    info!(class_id, faculty_id, "Appointed class advisor");
    Ok(())
}

/// Creates a subject in a department.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_subject(
    conn: &mut SqliteConnection,
    department_id: i64,
    name: &str,
    subject_type: SubjectType,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(subjects::table)
        .values((
            subjects::department_id.eq(department_id),
            subjects::name.eq(name),
            subjects::subject_type.eq(subject_type.as_str()),
        ))
        .execute(conn)?;

    let subject_id: i64 = get_last_insert_rowid(conn)?;
    debug!(subject_id, department_id, name, "Created subject");
    Ok(subject_id)
}
