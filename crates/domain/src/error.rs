// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised when a stored or submitted value falls outside its
/// closed value set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role string is not STUDENT, FACULTY or ADMIN.
    InvalidRole(String),
    /// No-due status string is not a known status.
    InvalidClearanceStatus(String),
    /// Fee status string is not PENDING or APPROVED.
    InvalidFeeStatus(String),
    /// Subject type string is not a known subject type.
    InvalidSubjectType(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(value) => write!(f, "Invalid role: {value}"),
            Self::InvalidClearanceStatus(value) => {
                write!(
                    f,
                    "Invalid no-due status: {value}. Expected PENDING, APPROVED or REJECTED"
                )
            }
            Self::InvalidFeeStatus(value) => {
                write!(f, "Invalid fee status: {value}. Expected PENDING or APPROVED")
            }
            Self::InvalidSubjectType(value) => write!(f, "Invalid subject type: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
