use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Entry {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub role: String,
    pub booked_calls: i64,
    pub no_shows: i64,
    pub closed_won: i64,
    pub closed_lost: i64,
    pub pif: i64,
    pub splits: i64,
    pub cash_collected: f64,
    pub renewals_cash: f64,
    pub reschedules: i64,
    pub created_at: NaiveDateTime,
}
