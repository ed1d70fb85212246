/// Insert payload for a form submission, produced by the webhook's field
/// resolution. Every field already carries its coerced default.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmissionCreateRequest {
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
}
