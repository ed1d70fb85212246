use common::error::Res;
use db::dtos::user::UserCreateRequest;
use db::models::user::User;
use sqlx::SqlitePool;

use crate::services;

pub async fn exists_by_email(pool: &SqlitePool, email: &str) -> Res<bool> {
    db::user::exists_by_email(pool, email).await
}

/// Hashes the password and inserts the user row.
/// Used when registering with credentials.
pub async fn create_user_with_credentials(
    pool: &SqlitePool,
    email: &str,
    password: &str,
    name: &str,
) -> Res<User> {
    let password_hash = services::auth::hash_password(password)?;

    db::user::insert(
        pool,
        UserCreateRequest {
            email: email.to_string(),
            password: password_hash,
            name: name.to_string(),
        },
    )
    .await
}
