use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One raw form submission, denormalized exactly as ingested. Rows are
/// insert-only; nothing ever updates or deletes them.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct FormSubmission {
    pub id: i64,
    pub timestamp: String,
    pub role: String,
    pub dials: i64,
    pub pick_ups: i64,
    pub dqs: i64,
    pub appts_pitched: i64,
    pub appts_set: i64,
    pub hybrid_closer: String,
    pub calls_scheduled: i64,
    pub live_calls: i64,
    pub prospect_email: String,
    pub call_date: String,
    pub offer_made: String,
    pub call_outcome: String,
    pub cash_collected: f64,
    pub revenue_generated: f64,
    pub call_notes: String,
    pub closer_name: String,
    pub setter_name: String,
    pub fathom_link: String,
    pub created_at: NaiveDateTime,
}
