// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bearer token extraction for the server.
//!
//! Tokens are verified statelessly against the server's signing secret; no
//! database lookup is made and the persistence lock is never taken.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use nodue_api::{AuthenticatedActor, AuthenticationService};
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

/// Extractor for authenticated callers.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     SessionActor(actor): SessionActor,
/// ) -> Result<Json<Response>, HttpError> {
///     // actor: AuthenticatedActor { user_id, role }
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if the `Authorization` header is missing, is not
/// a `Bearer` credential, or carries a token that fails verification.
/// Role checks happen later in the handlers.
pub struct SessionActor(pub AuthenticatedActor);

impl FromRequestParts<AppState> for SessionActor {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token: &str = bearer_token(auth_header).ok_or_else(|| {
            warn!("Authorization header is not a Bearer credential");
            SessionError::InvalidAuthorizationHeader
        })?;

        let actor: AuthenticatedActor =
            AuthenticationService::validate_token(&state.tokens, token)
                .map_err(|e| SessionError::InvalidToken(e.to_string()))?;

        debug!(user_id = actor.user_id, role = %actor.role, "Token accepted");

        Ok(Self(actor))
    }
}

/// Returns the credential of a `Bearer` authorization value.
///
/// The scheme name is matched case-insensitively.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token: &str = token.trim_start();
    (scheme.eq_ignore_ascii_case("Bearer") && !token.is_empty()).then_some(token)
}

/// Token extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Token verification failed.
    InvalidToken(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingAuthorizationHeader => String::from("Missing Authorization header"),
            Self::InvalidAuthorizationHeader => String::from(
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidToken(reason) => reason,
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse { error: message }),
        )
            .into_response()
    }
}
