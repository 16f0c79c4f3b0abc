// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The role a user account was provisioned with.
///
/// Roles are fixed at creation time and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// A student whose clearance is being tracked.
    Student,
    /// A faculty member who approves subject dues and, as advisor, fees.
    Faculty,
    /// An administrator with read access to global statistics.
    Admin,
}

impl Role {
    /// Parses a role from its stored representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not one of `STUDENT`, `FACULTY`
    /// or `ADMIN`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "STUDENT" => Ok(Self::Student),
            "FACULTY" => Ok(Self::Faculty),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }

    /// Returns the stored representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Faculty => "FACULTY",
            Self::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a single per-subject no-due record.
///
/// Any status may be set to any other; there is no enforced ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClearanceStatus {
    /// Not yet reviewed.
    Pending,
    /// Cleared by the responsible faculty member.
    Approved,
    /// Explicitly refused. Only reachable through direct API use.
    Rejected,
}

impl ClearanceStatus {
    /// Parses a clearance status.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidClearanceStatus(s.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    /// The status a faculty toggle moves this record to.
    ///
    /// Approved records go back to pending; everything else becomes approved.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Approved => Self::Pending,
            Self::Pending | Self::Rejected => Self::Approved,
        }
    }
}

impl std::fmt::Display for ClearanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fee clearance is two-valued: there is no rejected fee state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeeClearance {
    Pending,
    Approved,
}

impl FeeClearance {
    /// Parses a fee status.
    ///
    /// # Errors
    ///
    /// Returns an error for anything other than `PENDING` or `APPROVED`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "APPROVED" => Ok(Self::Approved),
            _ => Err(DomainError::InvalidFeeStatus(s.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Approved => Self::Pending,
            Self::Pending => Self::Approved,
        }
    }
}

impl std::fmt::Display for FeeClearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a subject a student must be cleared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubjectType {
    Theory,
    Lab,
    Library,
    Innovation,
}

impl SubjectType {
    /// Parses a subject type.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known subject type.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "THEORY" => Ok(Self::Theory),
            "LAB" => Ok(Self::Lab),
            "LIBRARY" => Ok(Self::Library),
            "INNOVATION" => Ok(Self::Innovation),
            _ => Err(DomainError::InvalidSubjectType(s.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Theory => "THEORY",
            Self::Lab => "LAB",
            Self::Library => "LIBRARY",
            Self::Innovation => "INNOVATION",
        }
    }
}

impl std::fmt::Display for SubjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
