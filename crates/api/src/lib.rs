// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the college no-due clearance tracker.
//!
//! This crate sits between the HTTP server and persistence. It owns the
//! credential format, role checks, request and response DTOs, the dashboard
//! handlers, and the client routing rules. It performs no I/O of its own
//! beyond the [`Persistence`](nodue_persistence::Persistence) handle passed
//! into each handler.

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

mod auth;
mod error;
mod handlers;
mod request_response;
pub mod views;

#[cfg(test)]
mod tests;

pub use auth::{
    AuthenticatedActor, AuthenticationService, AuthorizationService, TokenError, TokenService,
};
pub use error::{ApiError, AuthError, translate_domain_error, translate_persistence_error};
pub use handlers::{
    admin_stats, advisor_students, faculty_dashboard, faculty_students, login, student_dashboard,
    update_fees, update_no_due,
};
pub use request_response::{
    AdminStatsResponse, AdvisedStudentView, AssignmentView, ClassView, DepartmentView,
    FacultyDashboardResponse, FacultyStudentsQuery, FeeStatusView, LoginRequest, LoginResponse,
    LoginUser, NoDueRecordView, StudentDashboardResponse, StudentRecordView, StudentView,
    SubjectRecordView, SubjectView, UpdateFeesRequest, UpdateNoDueRequest, UserView,
};
