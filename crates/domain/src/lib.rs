// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain vocabulary for the college no-due clearance tracker.
//!
//! This crate holds the closed value sets shared by every other layer
//! (roles, clearance statuses, subject types) and the one piece of
//! arithmetic the system performs: the admin clearance rate.

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

mod clearance;
mod error;
mod types;

#[cfg(test)]
mod tests;

pub use clearance::{ClearanceRate, clearance_rate};
pub use error::DomainError;
pub use types::{ClearanceStatus, FeeClearance, Role, SubjectType};
