// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reference data queries: departments, classes and subjects.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{
    ClassData, ClassRow, DepartmentData, DepartmentRow, SubjectData, SubjectRow,
};
use crate::diesel_schema::{classes, departments, subjects};
use crate::error::PersistenceError;

/// Lists every department in creation order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_departments(conn: &mut SqliteConnection) -> Result<Vec<DepartmentData>, PersistenceError> {
    let rows: Vec<DepartmentRow> = departments::table
        .order(departments::department_id.asc())
        .select(DepartmentRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(DepartmentData::from).collect())
}

/// Retrieves a department by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Option<DepartmentData>, PersistenceError> {
    Ok(departments::table
        .find(department_id)
        .select(DepartmentRow::as_select())
        .first(conn)
        .optional()?
        .map(DepartmentData::from))
}

/// Retrieves a class together with its department.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_class_with_department(
    conn: &mut SqliteConnection,
    class_id: i64,
) -> Result<Option<(ClassData, DepartmentData)>, PersistenceError> {
    debug!("Looking up class {} with department", class_id);

    let row: Option<(ClassRow, DepartmentRow)> = classes::table
        .inner_join(departments::table)
        .filter(classes::class_id.eq(class_id))
        .select((ClassRow::as_select(), DepartmentRow::as_select()))
        .first(conn)
        .optional()?;

    Ok(row.map(|(class, department)| (class.into(), department.into())))
}

/// Lists the classes of a department, ordered by year then section.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_classes_for_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Vec<ClassData>, PersistenceError> {
    let rows: Vec<ClassRow> = classes::table
        .filter(classes::department_id.eq(department_id))
        .order((classes::year.asc(), classes::section.asc()))
        .select(ClassRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ClassData::from).collect())
}

/// Finds the class a faculty member advises, with its department.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the faculty member advises no class.
pub fn get_advisor_class(
    conn: &mut SqliteConnection,
    faculty_id: i64,
) -> Result<Option<(ClassData, DepartmentData)>, PersistenceError> {
    debug!("Looking up advisor class for faculty ID: {}", faculty_id);

    let row: Option<(ClassRow, DepartmentRow)> = classes::table
        .inner_join(departments::table)
        .filter(classes::advisor_id.eq(faculty_id))
        .select((ClassRow::as_select(), DepartmentRow::as_select()))
        .first(conn)
        .optional()?;

    Ok(row.map(|(class, department)| (class.into(), department.into())))
}

/// Lists the subjects of a department in creation order.
///
/// # Errors
///
/// Returns an error if the database query fails or a stored subject type
/// is not recognized.
pub fn list_subjects_for_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Vec<SubjectData>, PersistenceError> {
    let rows: Vec<SubjectRow> = subjects::table
        .filter(subjects::department_id.eq(department_id))
        .order(subjects::subject_id.asc())
        .select(SubjectRow::as_select())
        .load(conn)?;

    rows.into_iter().map(SubjectData::try_from).collect()
}
