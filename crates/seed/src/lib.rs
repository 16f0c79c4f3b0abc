// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data seeding.
//!
//! [`seed_database`] wipes every table and rebuilds a fixed campus: nine
//! departments, their classes, one admin, five subjects and three faculty
//! per department, and a configurable number of students per class. Every
//! student starts with one pending no-due record per department subject and
//! a pending fee status.
//!
//! Advisor appointment is the only random step. The caller supplies the
//! coin, so tests can make it deterministic.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::HashSet;

use nodue_domain::{Role, SubjectType};
use nodue_persistence::{EnrollmentData, Persistence, PersistenceError};
use tracing::{debug, info};

#[cfg(test)]
mod tests;

/// Department names in creation order.
pub const DEPARTMENTS: [&str; 9] = [
    "AIML", "AIDS", "CSE", "CSBS", "ECE", "MECH", "RA", "IT", "CYBER",
];

/// Departments that run a second section.
pub const TWO_SECTION_DEPARTMENTS: [&str; 3] = ["AIDS", "CSE", "ECE"];

/// Years of study.
pub const YEARS: [i32; 4] = [1, 2, 3, 4];

/// Subjects offered per department.
pub const SUBJECTS_PER_DEPARTMENT: usize = 5;

/// Faculty members created per department.
pub const FACULTY_PER_DEPARTMENT: usize = 3;

pub const ADMIN_EMAIL: &str = "admin@college.edu";
pub const ADMIN_NAME: &str = "Super Admin";

/// Seeding parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub students_per_class: u32,
    /// Shared password of every seeded account.
    pub password: String,
    pub bcrypt_cost: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            students_per_class: 5,
            password: String::from("password123"),
            bcrypt_cost: 10,
        }
    }
}

/// What a seeding run created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub departments: usize,
    pub classes: usize,
    pub subjects: usize,
    pub faculty: usize,
    pub advisors: usize,
    pub assignments: usize,
    pub students: usize,
    pub records: usize,
}

/// A created class, remembered for student enrollment.
struct SeededClass {
    class_id: i64,
    department: &'static str,
    year: i32,
    section: &'static str,
}

/// The sections a department runs.
#[must_use]
pub fn sections_for(department: &str) -> &'static [&'static str] {
    if TWO_SECTION_DEPARTMENTS.contains(&department) {
        &["A", "B"]
    } else {
        &["A"]
    }
}

/// The five subjects every department offers, in creation order.
#[must_use]
pub fn subjects_for(department: &str) -> [(String, SubjectType); SUBJECTS_PER_DEPARTMENT] {
    [
        (format!("{department} Core 1"), SubjectType::Theory),
        (format!("{department} Core 2"), SubjectType::Theory),
        (format!("{department} Lab"), SubjectType::Lab),
        (String::from("Library"), SubjectType::Library),
        (String::from("Innovation"), SubjectType::Innovation),
    ]
}

/// Wipes the database and rebuilds the demo campus.
///
/// # Arguments
///
/// * `persistence` - The persistence handle to seed
/// * `config` - Seeding parameters
/// * `accept_advisor` - Called once per eligible (faculty, class) pair; a
///   `true` appoints the faculty member as that class's advisor
///
/// # Errors
///
/// Returns an error if any insert fails. Rows written before the failure
/// are left in place; running the seed again wipes them.
pub fn seed_database<F>(
    persistence: &mut Persistence,
    config: &SeedConfig,
    mut accept_advisor: F,
) -> Result<SeedSummary, PersistenceError>
where
    F: FnMut() -> bool,
{
    let wiped: usize = persistence.wipe_all()?;
    info!(rows = wiped, "Cleared existing data");

    let password_hash: String = Persistence::hash_password(&config.password, config.bcrypt_cost)?;
    let mut summary: SeedSummary = SeedSummary::default();

    let mut department_ids: Vec<(&'static str, i64)> = Vec::with_capacity(DEPARTMENTS.len());
    for name in DEPARTMENTS {
        department_ids.push((name, persistence.create_department(name)?));
        summary.departments += 1;
    }

    let mut classes: Vec<SeededClass> = Vec::new();
    for &(department, department_id) in &department_ids {
        for year in YEARS {
            for &section in sections_for(department) {
                let class_id: i64 = persistence.create_class(department_id, year, section)?;
                classes.push(SeededClass {
                    class_id,
                    department,
                    year,
                    section,
                });
            }
        }
    }
    summary.classes = classes.len();
    info!(count = summary.classes, "Created classes");

    persistence.create_user(ADMIN_EMAIL, ADMIN_NAME, &password_hash, Role::Admin)?;
    info!(email = ADMIN_EMAIL, "Created admin");

    for &(department, department_id) in &department_ids {
        let mut subject_ids: Vec<i64> = Vec::with_capacity(SUBJECTS_PER_DEPARTMENT);
        for (name, subject_type) in subjects_for(department) {
            subject_ids.push(persistence.create_subject(department_id, &name, subject_type)?);
        }
        summary.subjects += subject_ids.len();

        let department_classes: Vec<i64> = classes
            .iter()
            .filter(|class| class.department == department)
            .map(|class| class.class_id)
            .collect();

        let mut advisors: HashSet<i64> = HashSet::new();
        let code: String = department.to_lowercase();

        for i in 1..=FACULTY_PER_DEPARTMENT {
            let user_id: i64 = persistence.create_user(
                &format!("faculty.{code}{i}@college.edu"),
                &format!("Prof. {department} {i}"),
                &password_hash,
                Role::Faculty,
            )?;
            let faculty_id: i64 = persistence.create_faculty(user_id, department_id)?;
            summary.faculty += 1;

            let subject_id: i64 = subject_ids[i % subject_ids.len()];

            for &class_id in &department_classes {
                let has_advisor: bool = persistence
                    .get_class_with_department(class_id)?
                    .is_some_and(|(class, _)| class.advisor_id.is_some());

                if !has_advisor && !advisors.contains(&faculty_id) && accept_advisor() {
                    persistence.set_class_advisor(class_id, faculty_id)?;
                    advisors.insert(faculty_id);
                    debug!(faculty_id, class_id, "Appointed class advisor");
                }

                persistence.create_faculty_assignment(faculty_id, class_id, subject_id)?;
                summary.assignments += 1;
            }
        }
        summary.advisors += advisors.len();
    }
    info!(
        faculty = summary.faculty,
        advisors = summary.advisors,
        "Created faculty and assignments"
    );

    for class in &classes {
        let code: String = class.department.to_lowercase();
        for n in 1..=config.students_per_class {
            let user_id: i64 = persistence.create_user(
                &format!(
                    "student.{code}{}{}{n}@college.edu",
                    class.year, class.section
                ),
                &format!("Student {} {n}", class.department),
                &password_hash,
                Role::Student,
            )?;
            let enrollment: EnrollmentData = persistence.create_student(
                user_id,
                class.class_id,
                &format!(
                    "{}-{}-{}-{n}",
                    class.department, class.year, class.section
                ),
            )?;
            summary.students += 1;
            summary.records += enrollment.records;
        }
    }

    info!(
        departments = summary.departments,
        classes = summary.classes,
        faculty = summary.faculty,
        advisors = summary.advisors,
        students = summary.students,
        records = summary.records,
        "Seeding complete"
    );

    Ok(summary)
}
