use chrono::Utc;
use common::error::Res;
use db::dtos::form::FormSubmissionCreateRequest;
use db::models::form::FormSubmission;
use serde_json::{Map, Value};
use sqlx::SqlitePool;

// Candidate payload keys per target column, in resolution order: the
// form's human-readable question text first, camelCase fallbacks last.
// Some questions carry a description after an embedded newline; resolution
// also accepts any payload key sharing a candidate's first line as a
// prefix, so wording drift behind the newline keeps resolving.
const TIMESTAMP: &[&str] = &["Timestamp"];
const ROLE: &[&str] = &["What is your role?", "role"];
const DIALS: &[&str] = &["Dials made?", "dials"];
const PICK_UPS: &[&str] = &["Pick ups?", "pickUps"];
const DQS: &[&str] = &["DQ's?", "dqs"];
const APPTS_PITCHED: &[&str] = &["Appt's Pitched?", "apptsPitched"];
const APPTS_SET: &[&str] = &["Appt's Set?", "apptsSet"];
const HYBRID_CLOSER: &[&str] = &["Hybrid Closer?", "hybridCloser"];
const CALLS_SCHEDULED: &[&str] = &["Calls Scheduled?", "callsScheduled"];
const LIVE_CALLS: &[&str] = &["LIVE Calls?", "liveCalls"];
const PROSPECT_EMAIL: &[&str] = &["Prospect Email", "prospectEmail"];
const CALL_DATE: &[&str] = &["Date Call Was Taken", "Date", "callDate", "date"];
const OFFER_MADE: &[&str] = &["Offer Made", "offerMade"];
const CALL_OUTCOME: &[&str] = &["Call Outcome", "callOutcome"];
const CASH_COLLECTED: &[&str] = &[
    "Cash Collected\nThe amount of cash collected today (ex 4000, 2000, 1500)",
    "Cash Collected",
    "cashCollected",
];
const REVENUE_GENERATED: &[&str] = &[
    "Revenue Generated\nThe total value of the contract (ex: 4000, 4500)",
    "Revenue Generated",
    "revenueGenerated",
];
const CALL_NOTES: &[&str] = &["Call Notes", "callNotes"];
const CLOSER_NAME: &[&str] = &["Closer Name", "closerName"];
const SETTER_NAME: &[&str] = &["Setter Name", "Setter", "setterName"];
const FATHOM_LINK: &[&str] = &["Fathom Link", "fathomLink"];

/// Maps the payload and persists one row. Replays are not detected; the
/// same submission twice inserts two rows.
pub async fn ingest(pool: &SqlitePool, payload: &Value) -> Res<i64> {
    let submission = map_submission(payload);
    db::form::insert(pool, &submission).await
}

pub async fn list_submissions(pool: &SqlitePool) -> Res<Vec<FormSubmission>> {
    db::form::list_all(pool).await
}

/// Resolves every target column from an arbitrary payload. Non-object
/// payloads map like an empty form: every field gets its default.
pub fn map_submission(payload: &Value) -> FormSubmissionCreateRequest {
    let empty = Map::new();
    let data = payload.as_object().unwrap_or(&empty);

    FormSubmissionCreateRequest {
        timestamp: match resolve(data, TIMESTAMP) {
            Some(value) => to_text(value),
            None => Utc::now().to_rfc3339(),
        },
        role: text(data, ROLE),
        dials: integer(data, DIALS),
        pick_ups: integer(data, PICK_UPS),
        dqs: integer(data, DQS),
        appts_pitched: integer(data, APPTS_PITCHED),
        appts_set: integer(data, APPTS_SET),
        hybrid_closer: text(data, HYBRID_CLOSER),
        calls_scheduled: integer(data, CALLS_SCHEDULED),
        live_calls: integer(data, LIVE_CALLS),
        prospect_email: text(data, PROSPECT_EMAIL),
        call_date: text(data, CALL_DATE),
        offer_made: text(data, OFFER_MADE),
        call_outcome: text(data, CALL_OUTCOME),
        cash_collected: money(data, CASH_COLLECTED),
        revenue_generated: money(data, REVENUE_GENERATED),
        call_notes: text(data, CALL_NOTES),
        closer_name: text(data, CLOSER_NAME),
        setter_name: text(data, SETTER_NAME),
        fathom_link: text(data, FATHOM_LINK),
    }
}

/// Two-tier lookup per candidate: an exact key with a non-empty value
/// wins, otherwise any key starting with the candidate's first line. First
/// hit across the candidate list wins.
fn resolve<'a>(data: &'a Map<String, Value>, candidates: &[&str]) -> Option<&'a Value> {
    for &name in candidates {
        if let Some(value) = data.get(name) {
            if !is_empty(value) {
                return Some(value);
            }
        }
        let prefix = name.split('\n').next().unwrap_or(name);
        for (key, value) in data {
            if key.starts_with(prefix) && !is_empty(value) {
                return Some(value);
            }
        }
    }
    None
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text(data: &Map<String, Value>, candidates: &[&str]) -> String {
    resolve(data, candidates).map(to_text).unwrap_or_default()
}

fn integer(data: &Map<String, Value>, candidates: &[&str]) -> i64 {
    match resolve(data, candidates) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| s.trim().parse::<f64>().ok().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

fn money(data: &Map<String, Value>, candidates: &[&str]) -> f64 {
    match resolve(data, candidates) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}
