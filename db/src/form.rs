use common::error::{AppError, Res};
use sqlx::{Executor, Sqlite};

use crate::{dtos::form::FormSubmissionCreateRequest, models::form::FormSubmission};

pub async fn insert<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
    data: &FormSubmissionCreateRequest,
) -> Res<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO form_submissions (
            timestamp, role, dials, pick_ups, dqs, appts_pitched, appts_set,
            hybrid_closer, calls_scheduled, live_calls, prospect_email,
            call_date, offer_made, call_outcome, cash_collected,
            revenue_generated, call_notes, closer_name, setter_name, fathom_link
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(&data.timestamp)
    .bind(&data.role)
    .bind(data.dials)
    .bind(data.pick_ups)
    .bind(data.dqs)
    .bind(data.appts_pitched)
    .bind(data.appts_set)
    .bind(&data.hybrid_closer)
    .bind(data.calls_scheduled)
    .bind(data.live_calls)
    .bind(&data.prospect_email)
    .bind(&data.call_date)
    .bind(&data.offer_made)
    .bind(&data.call_outcome)
    .bind(data.cash_collected)
    .bind(data.revenue_generated)
    .bind(&data.call_notes)
    .bind(&data.closer_name)
    .bind(&data.setter_name)
    .bind(&data.fathom_link)
    .fetch_one(executor)
    .await
    .map_err(AppError::from)
}

pub async fn list_all<'e, E: Executor<'e, Database = Sqlite>>(
    executor: E,
) -> Res<Vec<FormSubmission>> {
    sqlx::query_as::<_, FormSubmission>(
        "SELECT * FROM form_submissions ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(executor)
    .await
    .map_err(AppError::from)
}
