use chrono::NaiveDateTime;

/// Full user row, password hash included. Not serializable; the api layer
/// projects it down to a summary before anything leaves the process.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}
