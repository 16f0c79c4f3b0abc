// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nodue_domain::Role;
use time::{Duration, OffsetDateTime};

use super::helpers::{PASSWORD, create_campus, create_token_service};
use crate::{
    ApiError, AuthenticatedActor, AuthenticationService, LoginRequest, LoginResponse,
    TokenError, TokenService, login,
};

#[test]
fn test_token_round_trip_preserves_identity() {
    let tokens: TokenService = create_token_service();
    let actor: AuthenticatedActor = AuthenticatedActor::new(17, Role::Faculty);

    let token: String = tokens.issue(&actor).unwrap();

    assert_eq!(tokens.verify(&token).unwrap(), actor);
}

#[test]
fn test_expired_token_rejected() {
    let tokens: TokenService = create_token_service();
    let issued_at: OffsetDateTime = OffsetDateTime::now_utc() - Duration::hours(2);

    let token: String = tokens
        .issue_at(&AuthenticatedActor::new(1, Role::Student), issued_at)
        .unwrap();

    assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
}

#[test]
fn test_token_from_other_secret_rejected() {
    let ours: TokenService = create_token_service();
    let theirs: TokenService = TokenService::new("another-secret", Duration::hours(1));

    let token: String = theirs
        .issue(&AuthenticatedActor::new(1, Role::Admin))
        .unwrap();

    assert_eq!(ours.verify(&token), Err(TokenError::BadSignature));
}

#[test]
fn test_tampered_payload_rejected() {
    let tokens: TokenService = create_token_service();
    let student_token: String = tokens
        .issue(&AuthenticatedActor::new(5, Role::Student))
        .unwrap();
    let admin_token: String = tokens
        .issue(&AuthenticatedActor::new(5, Role::Admin))
        .unwrap();

    let (admin_payload, _) = admin_token.split_once('.').unwrap();
    let (_, student_signature) = student_token.split_once('.').unwrap();
    let forged: String = format!("{admin_payload}.{student_signature}");

    assert_eq!(tokens.verify(&forged), Err(TokenError::BadSignature));
}

#[test]
fn test_malformed_tokens_rejected() {
    let tokens: TokenService = create_token_service();

    assert_eq!(tokens.verify("no-dot-here"), Err(TokenError::Malformed));
    assert_eq!(tokens.verify("abc.not-hex"), Err(TokenError::Malformed));
    assert_eq!(tokens.verify(""), Err(TokenError::Malformed));
}

#[test]
fn test_login_issues_verifiable_token() {
    let mut campus = create_campus();
    let tokens: TokenService = create_token_service();

    let response: LoginResponse = login(
        &mut campus.persistence,
        &tokens,
        &LoginRequest {
            email: String::from("STUDENT.cse2b1@college.edu"),
            password: String::from(PASSWORD),
        },
    )
    .unwrap();

    assert_eq!(response.user.id, campus.student.user_id);
    assert_eq!(response.user.role, Role::Student);
    assert_eq!(response.user.name, "Student CSE 1");
    assert_eq!(tokens.verify(&response.token).unwrap(), campus.student);
}

#[test]
fn test_login_failures_are_indistinguishable() {
    let mut campus = create_campus();
    let tokens: TokenService = create_token_service();

    let wrong_password = login(
        &mut campus.persistence,
        &tokens,
        &LoginRequest {
            email: String::from("admin@college.edu"),
            password: String::from("wrong"),
        },
    );
    let unknown_email = login(
        &mut campus.persistence,
        &tokens,
        &LoginRequest {
            email: String::from("ghost@college.edu"),
            password: String::from(PASSWORD),
        },
    );

    let expected: ApiError = ApiError::AuthenticationFailed {
        reason: String::from(AuthenticationService::INVALID_CREDENTIALS),
    };
    assert_eq!(wrong_password, Err(expected.clone()));
    assert_eq!(unknown_email, Err(expected));
}

#[test]
fn test_expiry_overflow_is_an_error() {
    let tokens: TokenService = TokenService::new("test-secret", Duration::MAX);

    let result = tokens.issue(&AuthenticatedActor::new(1, Role::Admin));

    assert_eq!(result, Err(TokenError::ExpiryOutOfRange));
}

#[test]
fn test_login_with_unusable_stored_hash_is_internal() {
    let mut campus = create_campus();
    let tokens: TokenService = create_token_service();
    campus
        .persistence
        .create_user(
            "broken@college.edu",
            "Broken Hash",
            "not-a-bcrypt-hash",
            Role::Admin,
        )
        .unwrap();

    let result = login(
        &mut campus.persistence,
        &tokens,
        &LoginRequest {
            email: String::from("broken@college.edu"),
            password: String::from(PASSWORD),
        },
    );

    assert!(matches!(result, Err(ApiError::Internal { .. })));
}

#[test]
fn test_login_token_failure_is_internal() {
    let mut campus = create_campus();
    let tokens: TokenService = TokenService::new("test-secret", Duration::MAX);

    let result = login(
        &mut campus.persistence,
        &tokens,
        &LoginRequest {
            email: String::from("admin@college.edu"),
            password: String::from(PASSWORD),
        },
    );

    assert!(matches!(result, Err(ApiError::Internal { .. })));
}
