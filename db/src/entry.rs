use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::entry::EntryRequest, models::entry::Entry};

pub async fn list_for_user<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
) -> Res<Vec<Entry>> {
    sqlx::query_as::<_, Entry>(
        "SELECT * FROM entries WHERE user_id = ? ORDER BY date DESC, id DESC",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}

pub async fn insert<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    user_id: i64,
    data: &EntryRequest,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO entries (
            user_id, date, role, booked_calls, no_shows, closed_won,
            closed_lost, pif, splits, cash_collected, renewals_cash, reschedules
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(&data.date)
    .bind(&data.role)
    .bind(data.booked_calls)
    .bind(data.no_shows)
    .bind(data.closed_won)
    .bind(data.closed_lost)
    .bind(data.pif)
    .bind(data.splits)
    .bind(data.cash_collected)
    .bind(data.renewals_cash)
    .bind(data.reschedules)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

/// Overwrites every mutable column, guarded by ownership. Returns the
/// affected-row count; 0 means "no such entry for this owner".
pub async fn update<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    id: i64,
    user_id: i64,
    data: &EntryRequest,
) -> Res<u64> {
    sqlx::query(
        r#"
        UPDATE entries SET
            date = ?, role = ?, booked_calls = ?, no_shows = ?, closed_won = ?,
            closed_lost = ?, pif = ?, splits = ?, cash_collected = ?,
            renewals_cash = ?, reschedules = ?
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(&data.date)
    .bind(&data.role)
    .bind(data.booked_calls)
    .bind(data.no_shows)
    .bind(data.closed_won)
    .bind(data.closed_lost)
    .bind(data.pif)
    .bind(data.splits)
    .bind(data.cash_collected)
    .bind(data.renewals_cash)
    .bind(data.reschedules)
    .bind(id)
    .bind(user_id)
    .execute(executor)
    .await
    .map(|result| result.rows_affected())
    .map_err(AppError::from)
}

pub async fn delete<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    id: i64,
    user_id: i64,
) -> Res<u64> {
    sqlx::query("DELETE FROM entries WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(executor)
        .await
        .map(|result| result.rows_affected())
        .map_err(AppError::from)
}
