// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nodue_domain::{ClearanceStatus, FeeClearance, Role};

use crate::views::{
    ClientRoute, ClientSession, Navigation, View, resolve_route, route_for_role, toggle_fees,
    toggle_no_due,
};
use crate::{FeeStatusView, LoginResponse, LoginUser, NoDueRecordView};

fn session(role: Role) -> ClientSession {
    ClientSession::from(LoginResponse {
        token: String::from("payload.signature"),
        user: LoginUser {
            id: 3,
            role,
            name: String::from("Someone"),
        },
    })
}

#[test]
fn test_root_redirects_to_login() {
    assert_eq!(
        resolve_route("/", None),
        Navigation::Redirect(ClientRoute::Login)
    );
    assert_eq!(
        resolve_route("/", Some(&session(Role::Admin))),
        Navigation::Redirect(ClientRoute::Login)
    );
}

#[test]
fn test_login_is_always_reachable() {
    assert_eq!(resolve_route("/login", None), Navigation::ShowLogin);
    assert_eq!(
        resolve_route("/login", Some(&session(Role::Student))),
        Navigation::ShowLogin
    );
}

#[test]
fn test_role_routes_require_matching_session() {
    let faculty: ClientSession = session(Role::Faculty);

    assert_eq!(
        resolve_route("/faculty", Some(&faculty)),
        Navigation::Show(View::Faculty)
    );
    assert_eq!(
        resolve_route("/admin", Some(&faculty)),
        Navigation::Redirect(ClientRoute::Login)
    );
    assert_eq!(
        resolve_route("/student", None),
        Navigation::Redirect(ClientRoute::Login)
    );
}

#[test]
fn test_login_lands_on_role_home() {
    for role in [Role::Student, Role::Faculty, Role::Admin] {
        let route: ClientRoute = route_for_role(role);
        assert_eq!(
            resolve_route(route.path(), Some(&session(role))),
            Navigation::Show(View::for_role(role))
        );
    }
}

#[test]
fn test_bearer_header() {
    assert_eq!(
        session(Role::Student).bearer(),
        "Bearer payload.signature"
    );
}

#[test]
fn test_toggle_no_due_is_binary() {
    let mut record: NoDueRecordView = NoDueRecordView {
        id: 8,
        student_id: 1,
        subject_id: 2,
        status: ClearanceStatus::Approved,
        approved_by: Some(4),
        updated_at: None,
    };
    assert_eq!(toggle_no_due(&record).status, "PENDING");

    record.status = ClearanceStatus::Pending;
    assert_eq!(toggle_no_due(&record).status, "APPROVED");

    record.status = ClearanceStatus::Rejected;
    let request = toggle_no_due(&record);
    assert_eq!(request.status, "APPROVED");
    assert_eq!(request.record_id, 8);
}

#[test]
fn test_toggle_fees() {
    let fee: FeeStatusView = FeeStatusView {
        id: 1,
        student_id: 6,
        status: FeeClearance::Pending,
        updated_at: None,
    };

    let request = toggle_fees(&fee);

    assert_eq!(request.student_id, 6);
    assert_eq!(request.status, "APPROVED");
}
