use serde::Deserialize;

/// Request body for creating or overwriting an entry. Numeric fields
/// default to 0 when omitted; `date` and `role` are not validated (empty
/// strings persist).
#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub booked_calls: i64,
    #[serde(default)]
    pub no_shows: i64,
    #[serde(default)]
    pub closed_won: i64,
    #[serde(default)]
    pub closed_lost: i64,
    #[serde(default)]
    pub pif: i64,
    #[serde(default)]
    pub splits: i64,
    #[serde(default)]
    pub cash_collected: f64,
    #[serde(default)]
    pub renewals_cash: f64,
    #[serde(default)]
    pub reschedules: i64,
}
