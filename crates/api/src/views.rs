// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client routing and role views.
//!
//! A client keeps the token and user summary returned by login. Every
//! navigation goes through [`resolve_route`], which either selects exactly
//! one role view or redirects. Views never branch on the role themselves.

use nodue_domain::{ClearanceStatus, FeeClearance, Role};

use crate::request_response::{
    FeeStatusView, LoginResponse, NoDueRecordView, UpdateFeesRequest, UpdateNoDueRequest,
};

/// The client-side routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientRoute {
    Login,
    Student,
    Faculty,
    Admin,
}

impl ClientRoute {
    /// Matches a path exactly. `/` is not a route of its own; it resolves
    /// to a redirect.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Self::Login),
            "/student" => Some(Self::Student),
            "/faculty" => Some(Self::Faculty),
            "/admin" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Student => "/student",
            Self::Faculty => "/faculty",
            Self::Admin => "/admin",
        }
    }

    /// The role a session must hold to open this route.
    #[must_use]
    pub const fn required_role(self) -> Option<Role> {
        match self {
            Self::Login => None,
            Self::Student => Some(Role::Student),
            Self::Faculty => Some(Role::Faculty),
            Self::Admin => Some(Role::Admin),
        }
    }
}

/// The home route for a role, used right after login.
#[must_use]
pub const fn route_for_role(role: Role) -> ClientRoute {
    match role {
        Role::Student => ClientRoute::Student,
        Role::Faculty => ClientRoute::Faculty,
        Role::Admin => ClientRoute::Admin,
    }
}

/// What a client holds after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSession {
    pub token: String,
    pub user_id: i64,
    pub role: Role,
    pub name: String,
}

impl ClientSession {
    /// The `Authorization` header value for API calls.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<LoginResponse> for ClientSession {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user_id: response.user.id,
            role: response.user.role,
            name: response.user.name,
        }
    }
}

/// One role-specific screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Student,
    Faculty,
    Admin,
}

impl View {
    /// The view serving a role.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Faculty => Self::Faculty,
            Role::Admin => Self::Admin,
        }
    }
}

/// The outcome of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show the login form.
    ShowLogin,
    /// Show a role view.
    Show(View),
    /// Navigate elsewhere instead.
    Redirect(ClientRoute),
}

/// Decides what to render for `path` given the current session.
///
/// - `/login` is always reachable
/// - a role route renders its view only for a session holding that role
/// - everything else, including `/`, redirects to `/login`
#[must_use]
pub fn resolve_route(path: &str, session: Option<&ClientSession>) -> Navigation {
    let Some(route) = ClientRoute::parse(path) else {
        return Navigation::Redirect(ClientRoute::Login);
    };

    match (route.required_role(), session) {
        (None, _) => Navigation::ShowLogin,
        (Some(required), Some(session)) if session.role == required => {
            Navigation::Show(View::for_role(required))
        }
        (Some(_), _) => Navigation::Redirect(ClientRoute::Login),
    }
}

/// The request a faculty toggle on a no-due record sends.
///
/// Approved records go back to pending; pending and rejected records become
/// approved.
#[must_use]
pub fn toggle_no_due(record: &NoDueRecordView) -> UpdateNoDueRequest {
    let next: ClearanceStatus = record.status.toggled();
    UpdateNoDueRequest {
        record_id: record.id,
        status: next.as_str().to_string(),
    }
}

/// The request an advisor toggle on a fee status sends.
#[must_use]
pub fn toggle_fees(fee: &FeeStatusView) -> UpdateFeesRequest {
    let next: FeeClearance = fee.status.toggled();
    UpdateFeesRequest {
        student_id: fee.student_id,
        status: next.as_str().to_string(),
    }
}
