// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `users`: Account creation and password hashing
//! - `catalog`: Departments, classes, subjects and advisor appointment
//! - `people`: Faculty, teaching assignments and student enrollment
//! - `clearance`: No-due and fee status updates
//! - `maintenance`: Whole-database wipe used by the seeder

pub mod catalog;
pub mod clearance;
pub mod maintenance;
pub mod people;
pub mod users;
