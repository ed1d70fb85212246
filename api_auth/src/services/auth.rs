use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use common::error::{AppError, Res};
use db::models::user::User;
use sqlx::SqlitePool;

use crate::dtos::auth::LoginRequest;

pub fn hash_password(password: &str) -> Res<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Authenticates an existing user.
///
/// Unknown email, undecodable stored hash and wrong password all fail with
/// the same generic error: a caller cannot probe which emails are
/// registered.
///
/// # Arguments
///
/// * `pool` - A reference to the database connection pool.
/// * `login_data` - The login data.
///
/// # Returns
///
/// A `Result` containing the `User` object or an `AppError` if an error occurs.
pub async fn authenticate_user(pool: &SqlitePool, login_data: &LoginRequest) -> Res<User> {
    let email = login_data.email.clone().unwrap_or_default();
    let password = login_data.password.clone().unwrap_or_default();

    let Some(user) = db::user::get_by_email(pool, &email).await? else {
        return Err(invalid_credentials());
    };

    let parsed_hash = PasswordHash::new(&user.password).map_err(|_| invalid_credentials())?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid {
        Ok(user)
    } else {
        Err(invalid_credentials())
    }
}

fn invalid_credentials() -> AppError {
    AppError::BadRequest("Invalid email or password".to_string())
}
