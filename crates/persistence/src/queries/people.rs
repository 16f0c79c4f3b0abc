// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Faculty, student and teaching-assignment queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{
    ClassData, ClassRow, DepartmentData, DepartmentRow, FacultyAssignmentData,
    FacultyAssignmentRow, FacultyData, FacultyRow, FeeStatusData, FeeStatusRow, StudentData,
    StudentRow, SubjectData, SubjectRow, UserData, UserRow,
};
use crate::diesel_schema::{
    classes, departments, faculty, faculty_assignments, fee_statuses, students, subjects, users,
};
use crate::error::PersistenceError;

/// An assignment with the class, class department and subject it covers.
pub type AssignmentDetail = (FacultyAssignmentData, ClassData, DepartmentData, SubjectData);

/// Retrieves the faculty profile linked to a user account.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_faculty_by_user_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<FacultyData>, PersistenceError> {
    debug!("Looking up faculty by user ID: {}", user_id);

    Ok(faculty::table
        .filter(faculty::user_id.eq(user_id))
        .select(FacultyRow::as_select())
        .first(conn)
        .optional()?
        .map(FacultyData::from))
}

/// Lists the faculty of a department in creation order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_faculty_for_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<Vec<FacultyData>, PersistenceError> {
    let rows: Vec<FacultyRow> = faculty::table
        .filter(faculty::department_id.eq(department_id))
        .order(faculty::faculty_id.asc())
        .select(FacultyRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(FacultyData::from).collect())
}

/// Lists a faculty member's assignments with class, department and subject.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_assignments_for_faculty(
    conn: &mut SqliteConnection,
    faculty_id: i64,
) -> Result<Vec<AssignmentDetail>, PersistenceError> {
    debug!("Listing assignments for faculty ID: {}", faculty_id);

    let rows: Vec<(FacultyAssignmentRow, ClassRow, DepartmentRow, SubjectRow)> =
        faculty_assignments::table
            .inner_join(classes::table.inner_join(departments::table))
            .inner_join(subjects::table)
            .filter(faculty_assignments::faculty_id.eq(faculty_id))
            .order(faculty_assignments::assignment_id.asc())
            .select((
                FacultyAssignmentRow::as_select(),
                ClassRow::as_select(),
                DepartmentRow::as_select(),
                SubjectRow::as_select(),
            ))
            .load(conn)?;

    rows.into_iter()
        .map(|(assignment, class, department, subject)| {
            Ok((
                assignment.into(),
                class.into(),
                department.into(),
                SubjectData::try_from(subject)?,
            ))
        })
        .collect()
}

/// Retrieves the student profile linked to a user account.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_student_by_user_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<StudentData>, PersistenceError> {
    debug!("Looking up student by user ID: {}", user_id);

    Ok(students::table
        .filter(students::user_id.eq(user_id))
        .select(StudentRow::as_select())
        .first(conn)
        .optional()?
        .map(StudentData::from))
}

/// Lists the students of a class with their account and fee status.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_students_with_fees(
    conn: &mut SqliteConnection,
    class_id: i64,
) -> Result<Vec<(StudentData, UserData, FeeStatusData)>, PersistenceError> {
    debug!("Listing students with fee status for class ID: {}", class_id);

    let rows: Vec<(StudentRow, UserRow, FeeStatusRow)> = students::table
        .inner_join(users::table)
        .inner_join(fee_statuses::table)
        .filter(students::class_id.eq(class_id))
        .order(students::student_id.asc())
        .select((
            StudentRow::as_select(),
            UserRow::as_select(),
            FeeStatusRow::as_select(),
        ))
        .load(conn)?;

    rows.into_iter()
        .map(|(student, user, fee)| {
            Ok((
                student.into(),
                UserData::try_from(user)?,
                FeeStatusData::try_from(fee)?,
            ))
        })
        .collect()
}
