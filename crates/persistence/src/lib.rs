// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the college no-due clearance tracker.
//!
//! This crate owns the relational schema (users, departments, classes,
//! subjects, faculty, students, faculty assignments, no-due records and
//! fee statuses) and every query and mutation issued against it. It is
//! built on Diesel over `SQLite`.
//!
//! ## Access Model
//!
//! There is no process-wide client. Callers construct a [`Persistence`]
//! handle explicitly and pass it to whatever needs database access. Every
//! dashboard operation maps onto one method of the handle.
//!
//! ## Concurrency
//!
//! Updates are single statements with last-write-wins semantics; the only
//! multi-statement transaction is student enrollment, which must create the
//! student together with its no-due records and fee status.
//!
//! ## Testing
//!
//! [`Persistence::new_in_memory`] gives every caller an isolated shared-cache
//! in-memory database with migrations applied.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use nodue_domain::{ClearanceStatus, FeeClearance, Role, SubjectType};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    ClassData, ClearanceCounts, DepartmentData, EnrollmentData, FacultyAssignmentData,
    FacultyData, FeeStatusData, NoDueRecordData, StudentData, SubjectData, UserData,
};
pub use error::PersistenceError;
pub use queries::people::AssignmentDetail;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID so tests
/// never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Data-access handle over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a handle over a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:nodue_memdb_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a handle over a file-based database, creating it if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Creates a user account from an already hashed password.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the email is taken.
    pub fn create_user(
        &mut self,
        email: &str,
        name: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<i64, PersistenceError> {
        mutations::users::create_user(&mut self.conn, email, name, password_hash, role)
    }

    /// Retrieves a user by email (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_by_email(&mut self, email: &str) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_email(&mut self.conn, email)
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user_by_id(&mut self, user_id: i64) -> Result<Option<UserData>, PersistenceError> {
        queries::users::get_user_by_id(&mut self.conn, user_id)
    }

    /// Hashes a password with bcrypt at the given cost.
    ///
    /// # Errors
    ///
    /// Returns an error if the cost is invalid.
    pub fn hash_password(password: &str, cost: u32) -> Result<String, PersistenceError> {
        mutations::users::hash_password(password, cost)
    }

    /// Verifies a password against a stored bcrypt hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hash is malformed.
    pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
        queries::users::verify_password(password, password_hash)
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Creates a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the name is taken.
    pub fn create_department(&mut self, name: &str) -> Result<i64, PersistenceError> {
        mutations::catalog::create_department(&mut self.conn, name)
    }

    /// Lists every department.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_departments(&mut self) -> Result<Vec<DepartmentData>, PersistenceError> {
        queries::catalog::list_departments(&mut self.conn)
    }

    /// Retrieves a department by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_department(
        &mut self,
        department_id: i64,
    ) -> Result<Option<DepartmentData>, PersistenceError> {
        queries::catalog::get_department(&mut self.conn, department_id)
    }

    /// Creates a class without an advisor.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_class(
        &mut self,
        department_id: i64,
        year: i32,
        section: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::create_class(&mut self.conn, department_id, year, section)
    }

    /// Retrieves a class with its department.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_class_with_department(
        &mut self,
        class_id: i64,
    ) -> Result<Option<(ClassData, DepartmentData)>, PersistenceError> {
        queries::catalog::get_class_with_department(&mut self.conn, class_id)
    }

    /// Lists the classes of a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_classes_for_department(
        &mut self,
        department_id: i64,
    ) -> Result<Vec<ClassData>, PersistenceError> {
        queries::catalog::list_classes_for_department(&mut self.conn, department_id)
    }

    /// Appoints the advisor of a class that has none.
    ///
    /// # Errors
    ///
    /// Returns an error if the class already has an advisor or the faculty
    /// member advises another class.
    pub fn set_class_advisor(
        &mut self,
        class_id: i64,
        faculty_id: i64,
    ) -> Result<(), PersistenceError> {
        mutations::catalog::set_class_advisor(&mut self.conn, class_id, faculty_id)
    }

    /// Retrieves the class a faculty member advises.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_advisor_class(
        &mut self,
        faculty_id: i64,
    ) -> Result<Option<(ClassData, DepartmentData)>, PersistenceError> {
        queries::catalog::get_advisor_class(&mut self.conn, faculty_id)
    }

    /// Creates a subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_subject(
        &mut self,
        department_id: i64,
        name: &str,
        subject_type: SubjectType,
    ) -> Result<i64, PersistenceError> {
        mutations::catalog::create_subject(&mut self.conn, department_id, name, subject_type)
    }

    /// Lists the subjects of a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_subjects_for_department(
        &mut self,
        department_id: i64,
    ) -> Result<Vec<SubjectData>, PersistenceError> {
        queries::catalog::list_subjects_for_department(&mut self.conn, department_id)
    }

    // ========================================================================
    // Faculty & Students
    // ========================================================================

    /// Creates a faculty profile for a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_faculty(
        &mut self,
        user_id: i64,
        department_id: i64,
    ) -> Result<i64, PersistenceError> {
        mutations::people::create_faculty(&mut self.conn, user_id, department_id)
    }

    /// Retrieves the faculty profile of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_faculty_by_user_id(
        &mut self,
        user_id: i64,
    ) -> Result<Option<FacultyData>, PersistenceError> {
        queries::people::get_faculty_by_user_id(&mut self.conn, user_id)
    }

    /// Lists the faculty of a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_faculty_for_department(
        &mut self,
        department_id: i64,
    ) -> Result<Vec<FacultyData>, PersistenceError> {
        queries::people::list_faculty_for_department(&mut self.conn, department_id)
    }

    /// Grants a faculty member approval rights over a subject in a class.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_faculty_assignment(
        &mut self,
        faculty_id: i64,
        class_id: i64,
        subject_id: i64,
    ) -> Result<i64, PersistenceError> {
        mutations::people::create_faculty_assignment(
            &mut self.conn,
            faculty_id,
            class_id,
            subject_id,
        )
    }

    /// Lists a faculty member's assignments with class, department and subject.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_assignments_for_faculty(
        &mut self,
        faculty_id: i64,
    ) -> Result<Vec<AssignmentDetail>, PersistenceError> {
        queries::people::list_assignments_for_faculty(&mut self.conn, faculty_id)
    }

    /// Enrolls a student together with its pending no-due records and fee status.
    ///
    /// # Errors
    ///
    /// Returns an error if the class does not exist or any insert fails.
    pub fn create_student(
        &mut self,
        user_id: i64,
        class_id: i64,
        roll_number: &str,
    ) -> Result<EnrollmentData, PersistenceError> {
        mutations::people::create_student(&mut self.conn, user_id, class_id, roll_number)
    }

    /// Retrieves the student profile of a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_student_by_user_id(
        &mut self,
        user_id: i64,
    ) -> Result<Option<StudentData>, PersistenceError> {
        queries::people::get_student_by_user_id(&mut self.conn, user_id)
    }

    /// Lists the students of a class with account and fee status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_students_with_fees(
        &mut self,
        class_id: i64,
    ) -> Result<Vec<(StudentData, UserData, FeeStatusData)>, PersistenceError> {
        queries::people::list_students_with_fees(&mut self.conn, class_id)
    }

    // ========================================================================
    // Clearance
    // ========================================================================

    /// Retrieves a single no-due record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_no_due_record(
        &mut self,
        record_id: i64,
    ) -> Result<Option<NoDueRecordData>, PersistenceError> {
        queries::clearance::get_no_due_record(&mut self.conn, record_id)
    }

    /// Lists a student's no-due records with their subjects.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_records_for_student(
        &mut self,
        student_id: i64,
    ) -> Result<Vec<(NoDueRecordData, SubjectData)>, PersistenceError> {
        queries::clearance::list_records_for_student(&mut self.conn, student_id)
    }

    /// Lists the no-due records of one subject for the students of one class.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_records_for_class_subject(
        &mut self,
        class_id: i64,
        subject_id: i64,
    ) -> Result<Vec<(NoDueRecordData, StudentData, UserData)>, PersistenceError> {
        queries::clearance::list_records_for_class_subject(&mut self.conn, class_id, subject_id)
    }

    /// Retrieves the fee status of a student.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_fee_status_for_student(
        &mut self,
        student_id: i64,
    ) -> Result<Option<FeeStatusData>, PersistenceError> {
        queries::clearance::get_fee_status_for_student(&mut self.conn, student_id)
    }

    /// Counts students, faculty, departments and approved/total no-due records.
    ///
    /// # Errors
    ///
    /// Returns an error if any count fails.
    pub fn get_clearance_counts(&mut self) -> Result<ClearanceCounts, PersistenceError> {
        queries::clearance::get_clearance_counts(&mut self.conn)
    }

    /// Sets a no-due record's status and stamps the acting user as approver.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the record does not exist.
    pub fn update_no_due_status(
        &mut self,
        record_id: i64,
        status: ClearanceStatus,
        acting_user_id: i64,
    ) -> Result<NoDueRecordData, PersistenceError> {
        mutations::clearance::update_no_due_status(
            &mut self.conn,
            record_id,
            status,
            acting_user_id,
        )
    }

    /// Sets a student's fee status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the student has no fee status.
    pub fn update_fee_status(
        &mut self,
        student_id: i64,
        status: FeeClearance,
    ) -> Result<FeeStatusData, PersistenceError> {
        mutations::clearance::update_fee_status(&mut self.conn, student_id, status)
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Deletes all rows from all tables in dependency order.
    ///
    /// # Errors
    ///
    /// Returns an error if any delete fails.
    pub fn wipe_all(&mut self) -> Result<usize, PersistenceError> {
        mutations::maintenance::wipe_all(&mut self.conn)
    }
}
