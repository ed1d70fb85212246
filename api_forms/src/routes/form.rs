use std::sync::Arc;

use actix_web::{Responder, get, post, web};
use common::{error::Res, http::Success};
use serde_json::{Value, json};
use sqlx::SqlitePool;

use crate::dtos::form::FormEntryView;
use crate::services;

/// Receives a Google Form submission.
///
/// # Input
/// - `payload`: arbitrary JSON object; keys are whatever question text the
///   form currently uses. Field resolution tolerates renamed and
///   description-bearing keys.
/// - `pool`: Database connection pool
///
/// # Output
/// - Success: `{success, id, message}` with the new row id. The form tool
///   only needs the acknowledgment; nothing downstream is awaited.
/// - Error: 500 if the row cannot be persisted
#[post("/google-form")]
pub async fn post_google_form(
    payload: web::Json<Value>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    log::info!("Received Google Form submission");

    let id = services::ingest::ingest(&pool, &payload).await?;
    Success::ok(json!({
        "success": true,
        "id": id,
        "message": "Form submission saved"
    }))
}

/// All form submissions, raw column names, newest first. Unauthenticated:
/// the dashboard reads this without a session.
#[get("/entries")]
pub async fn get_webhook_entries(pool: web::Data<Arc<SqlitePool>>) -> Res<impl Responder> {
    let entries = services::ingest::list_submissions(&pool).await?;
    Success::ok(json!({ "entries": entries }))
}

/// All form submissions projected to camelCase for the dashboard.
#[get("/entries")]
pub async fn get_form_entries(pool: web::Data<Arc<SqlitePool>>) -> Res<impl Responder> {
    let entries: Vec<FormEntryView> = services::ingest::list_submissions(&pool)
        .await?
        .into_iter()
        .map(FormEntryView::from)
        .collect();
    Success::ok(json!({ "entries": entries }))
}
