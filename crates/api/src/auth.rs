// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.
//!
//! Credentials are stateless signed tokens of the form
//! `<payload>.<signature>`:
//!
//! - `payload` is the unpadded base64url encoding of the JSON claims
//!   `{"userId": .., "role": "..", "exp": ..}`
//! - `signature` is the lower-case hex HMAC-SHA256 of the encoded payload
//!
//! Nothing is stored server-side, so logging out is the client discarding
//! its token.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use nodue_domain::Role;
use nodue_persistence::{Persistence, UserData};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use time::{Duration, OffsetDateTime};
use tracing::{debug, error, warn};

use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// An authenticated user with an associated role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The id of the authenticated user account.
    pub user_id: i64,
    /// The role the account was provisioned with.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    #[must_use]
    pub const fn new(user_id: i64, role: Role) -> Self {
        Self { user_id, role }
    }
}

/// Claims carried inside a token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    user_id: i64,
    role: Role,
    /// Expiry as unix seconds.
    exp: i64,
}

/// Reasons a token can be refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,
    #[error("Token signature is invalid")]
    BadSignature,
    #[error("Token has expired")]
    Expired,
    #[error("Token signing key is unusable")]
    InvalidKey,
    #[error("Token claims could not be encoded: {0}")]
    Encoding(String),
    #[error("Token expiry is out of range")]
    ExpiryOutOfRange,
}

/// Issues and verifies signed bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    secret: Vec<u8>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    /// Default token lifetime.
    pub const DEFAULT_TTL: Duration = Duration::hours(24);

    /// Creates a token service signing with `secret`.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    /// Issues a token for `actor` that expires one lifetime from now.
    ///
    /// # Errors
    ///
    /// Returns an error if the claims cannot be encoded or signed.
    pub fn issue(&self, actor: &AuthenticatedActor) -> Result<String, TokenError> {
        self.issue_at(actor, OffsetDateTime::now_utc())
    }

    /// Issues a token as if the current time were `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the expiry overflows the representable range,
    /// or the claims cannot be encoded or signed.
    pub fn issue_at(
        &self,
        actor: &AuthenticatedActor,
        now: OffsetDateTime,
    ) -> Result<String, TokenError> {
        let expires_at: OffsetDateTime = now
            .checked_add(self.ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims: TokenClaims = TokenClaims {
            user_id: actor.user_id,
            role: actor.role,
            exp: expires_at.unix_timestamp(),
        };
        let json: Vec<u8> =
            serde_json::to_vec(&claims).map_err(|e| TokenError::Encoding(e.to_string()))?;
        let payload: String = URL_SAFE_NO_PAD.encode(json);
        let signature: String = hex::encode(self.sign(payload.as_bytes())?);

        Ok(format!("{payload}.{signature}"))
    }

    /// Verifies a token and returns the actor it was issued to.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed, carries a bad signature,
    /// or has expired.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedActor, TokenError> {
        self.verify_at(token, OffsetDateTime::now_utc())
    }

    /// Verifies a token as if the current time were `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed, carries a bad signature,
    /// or has expired at `now`.
    pub fn verify_at(
        &self,
        token: &str,
        now: OffsetDateTime,
    ) -> Result<AuthenticatedActor, TokenError> {
        let (payload, signature) = token.split_once('.').ok_or(TokenError::Malformed)?;
        let signature: Vec<u8> = hex::decode(signature).map_err(|_| TokenError::Malformed)?;

        let mut mac: HmacSha256 =
            HmacSha256::new_from_slice(&self.secret).map_err(|_| TokenError::InvalidKey)?;
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::BadSignature)?;

        let json: Vec<u8> = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&json).map_err(|_| TokenError::Malformed)?;

        if now.unix_timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(AuthenticatedActor::new(claims.user_id, claims.role))
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, TokenError> {
        let mut mac: HmacSha256 =
            HmacSha256::new_from_slice(&self.secret).map_err(|_| TokenError::InvalidKey)?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().to_vec())
    }
}

/// Authentication service for email and password login.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Message returned for every failed login, so callers cannot probe
    /// which emails exist.
    pub const INVALID_CREDENTIALS: &'static str = "Invalid credentials";

    /// Checks an email and password and issues a token for the account.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `tokens` - The token service used to sign the credential
    /// * `email` - The login email, matched case-insensitively
    /// * `password` - The plaintext password
    ///
    /// # Returns
    ///
    /// A tuple of (`token`, `authenticated_actor`, `user_data`)
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationFailed` if the user is unknown or the password
    /// is wrong. Returns `Internal` if the lookup fails, the stored hash is
    /// unusable, or the token cannot be issued.
    pub fn login(
        persistence: &mut Persistence,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<(String, AuthenticatedActor, UserData), AuthError> {
        let user: UserData = persistence
            .get_user_by_email(email)
            .map_err(|e| AuthError::Internal {
                message: e.to_string(),
            })?
            .ok_or_else(|| {
                debug!(email, "Login for unknown email");
                Self::invalid_credentials()
            })?;

        let verified: bool = Persistence::verify_password(password, &user.password_hash)
            .map_err(|e| {
                error!(user_id = user.user_id, error = %e, "Stored password hash is unusable");
                AuthError::Internal {
                    message: e.to_string(),
                }
            })?;
        if !verified {
            debug!(user_id = user.user_id, "Login with wrong password");
            return Err(Self::invalid_credentials());
        }

        let actor: AuthenticatedActor = AuthenticatedActor::new(user.user_id, user.role);
        let token: String = tokens
            .issue(&actor)
            .map_err(|e| AuthError::Internal {
                message: format!("Failed to issue token: {e}"),
            })?;

        Ok((token, actor, user))
    }

    /// Validates a bearer token and returns the authenticated actor.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is rejected.
    pub fn validate_token(
        tokens: &TokenService,
        token: &str,
    ) -> Result<AuthenticatedActor, AuthError> {
        tokens.verify(token).map_err(|e| {
            warn!(error = %e, "Rejected bearer token");
            AuthError::AuthenticationFailed {
                reason: e.to_string(),
            }
        })
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from(Self::INVALID_CREDENTIALS),
        }
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that an actor holds the role an action requires.
    ///
    /// # Arguments
    ///
    /// * `actor` - The authenticated actor
    /// * `required` - The role the action requires
    /// * `action` - The action name, used in the error
    ///
    /// # Errors
    ///
    /// Returns an error if the actor's role differs from `required`.
    pub fn require_role(
        actor: &AuthenticatedActor,
        required: Role,
        action: &str,
    ) -> Result<(), AuthError> {
        if actor.role == required {
            return Ok(());
        }

        warn!(
            user_id = actor.user_id,
            role = %actor.role,
            action,
            "Role check failed"
        );
        Err(AuthError::Unauthorized {
            action: action.to_string(),
            required_role: required.to_string(),
        })
    }
}
