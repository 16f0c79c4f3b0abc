// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User account queries.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use crate::data_models::{UserData, UserRow};
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Retrieves a user by email address.
///
/// The email is normalized to lowercase, matching how it was stored.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no account uses this email.
pub fn get_user_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<UserData>, PersistenceError> {
    let normalized_email: String = email.trim().to_lowercase();

    debug!("Looking up user by email: {}", normalized_email);

    users::table
        .filter(users::email.eq(&normalized_email))
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .map(UserData::try_from)
        .transpose()
}

/// Retrieves a user by id.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn get_user_by_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> Result<Option<UserData>, PersistenceError> {
    debug!("Looking up user by ID: {}", user_id);

    users::table
        .find(user_id)
        .select(UserRow::as_select())
        .first(conn)
        .optional()?
        .map(UserData::try_from)
        .transpose()
}

/// Checks a plain-text password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the stored hash is malformed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    Ok(bcrypt::verify(password, password_hash)?)
}
