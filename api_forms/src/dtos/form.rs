use chrono::NaiveDateTime;
use db::models::form::FormSubmission;
use serde::Serialize;

/// Dashboard projection of a form submission: same columns, camelCase
/// keys.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntryView {
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

impl From<FormSubmission> for FormEntryView {
    fn from(submission: FormSubmission) -> Self {
        FormEntryView {
            id: submission.id,
            timestamp: submission.timestamp,
            role: submission.role,
            dials: submission.dials,
            pick_ups: submission.pick_ups,
            dqs: submission.dqs,
            appts_pitched: submission.appts_pitched,
            appts_set: submission.appts_set,
            hybrid_closer: submission.hybrid_closer,
            calls_scheduled: submission.calls_scheduled,
            live_calls: submission.live_calls,
            prospect_email: submission.prospect_email,
            call_date: submission.call_date,
            offer_made: submission.offer_made,
            call_outcome: submission.call_outcome,
            cash_collected: submission.cash_collected,
            revenue_generated: submission.revenue_generated,
            call_notes: submission.call_notes,
            closer_name: submission.closer_name,
            setter_name: submission.setter_name,
            fathom_link: submission.fathom_link,
            created_at: submission.created_at,
        }
    }
}
