// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User account mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use nodue_domain::Role;
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Hashes a plain-text password with bcrypt at the given cost.
///
/// Callers provisioning many accounts hash once and reuse the result.
///
/// # Errors
///
/// Returns an error if the cost is out of bcrypt's range.
pub fn hash_password(password: &str, cost: u32) -> Result<String, PersistenceError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Creates a user account from an already hashed password.
///
/// The email is normalized to lowercase for case-insensitive uniqueness.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the email is
/// already taken.
pub fn create_user(
    conn: &mut SqliteConnection,
    email: &str,
    name: &str,
    password_hash: &str,
    role: Role,
) -> Result<i64, PersistenceError> {
    let normalized_email: String = email.trim().to_lowercase();

    diesel::insert_into(users::table)
        .values((
            users::email.eq(&normalized_email),
            users::password_hash.eq(password_hash),
            users::name.eq(name),
            users::role.eq(role.as_str()),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;

    info!(user_id, email = %normalized_email, role = %role, "Created user");

    Ok(user_id)
}
