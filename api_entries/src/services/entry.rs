use common::error::{AppError, Res};
use db::dtos::entry::EntryRequest;
use db::models::entry::Entry;
use sqlx::SqlitePool;

pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Res<Vec<Entry>> {
    db::entry::list_for_user(pool, user_id).await
}

pub async fn create(pool: &SqlitePool, user_id: i64, data: &EntryRequest) -> Res<i64> {
    db::entry::insert(pool, user_id, data).await
}

/// A miss on either the id or the owner reports not-found: callers cannot
/// tell someone else's entry apart from one that does not exist.
pub async fn update(pool: &SqlitePool, id: i64, user_id: i64, data: &EntryRequest) -> Res<()> {
    let affected = db::entry::update(pool, id, user_id, data).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Entry not found".to_string()));
    }
    Ok(())
}

pub async fn delete(pool: &SqlitePool, id: i64, user_id: i64) -> Res<()> {
    let affected = db::entry::delete(pool, id, user_id).await?;
    if affected == 0 {
        return Err(AppError::NotFound("Entry not found".to_string()));
    }
    Ok(())
}
