use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::user::UserCreateRequest, models::user::User};

pub async fn exists_by_email<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    email: &str,
) -> Res<bool> {
    sqlx::query_scalar::<_, i64>("SELECT EXISTS(SELECT 1 FROM users WHERE email = ?)")
        .bind(email)
        .fetch_one(executor)
        .await
        .map(|exists| exists != 0)
        .map_err(AppError::from)
}

pub async fn get_by_email<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    email: &str,
) -> Res<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(email)
        .fetch_optional(executor)
        .await
        .map_err(AppError::from)
}

pub async fn get_by_id<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
) -> Res<User> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_one(executor)
        .await
        .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: UserCreateRequest,
) -> Res<User> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password, name)
        VALUES (?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(data.email)
    .bind(data.password)
    .bind(data.name)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}
