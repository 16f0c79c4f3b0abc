// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `users`: Account lookups and password verification
//! - `catalog`: Departments, classes and subjects
//! - `people`: Faculty, students and teaching assignments
//! - `clearance`: No-due records, fee statuses and admin counters

pub mod catalog;
pub mod clearance;
pub mod people;
pub mod users;
