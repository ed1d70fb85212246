use actix_session::Session;
use actix_web::{Responder, post, web};
use common::error::{AppError, Res};
use common::http::Success;
use common::session::{self, SessionUser};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::dtos::auth::{AuthResponse, LoginRequest, RegisterRequest, UserSummary};
use crate::services;

/// Registers a new user with email and password authentication.
///
/// # Input
/// - `req`: JSON payload containing registration information (email, password, name)
/// - `pool`: Database connection pool
/// - `session`: The caller's session, signed in as the new user on success
///
/// # Output
/// - Success: Returns the created user summary with 201 Created status
/// - Error: Returns 400 Bad Request if a field is missing or the email already exists
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/register', {
///   method: 'POST',
///   credentials: 'include',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({
///     email: 'user@example.com',
///     password: 'securepassword',
///     name: 'Jane Doe'
///   })
/// });
/// ```
#[post("/register")]
pub async fn post_register(
    req: web::Json<RegisterRequest>,
    pool: web::Data<Arc<SqlitePool>>,
    session: Session,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &**pool;
    let req = req.into_inner();

    let (Some(email), Some(password), Some(name)) = (req.email, req.password, req.name) else {
        return Err(AppError::BadRequest(
            "Email, password and name are required".to_string(),
        ));
    };
    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err(AppError::BadRequest(
            "Email, password and name are required".to_string(),
        ));
    }

    let email_exists = services::user::exists_by_email(db_pool, &email).await?;
    if email_exists {
        return Err(AppError::BadRequest("Email already registered".to_string()));
    }

    let user =
        services::user::create_user_with_credentials(db_pool, &email, &password, &name).await?;
    session::store_session_user(
        &session,
        &SessionUser {
            id: user.id,
            name: user.name.clone(),
        },
    )?;

    Success::created(AuthResponse {
        success: true,
        user: UserSummary::from(user),
    })
}

/// Authenticates a user with email and password.
///
/// # Input
/// - `login_data`: JSON payload containing email and password
/// - `pool`: Database connection pool
/// - `session`: The caller's session, signed in on success
///
/// # Output
/// - Success: Returns the user summary and sets the session cookie
/// - Error: Returns 400 Bad Request for invalid credentials (the same
///   response whether the email is unknown or the password is wrong)
///
/// # Frontend Example
/// ```javascript
/// const response = await fetch('/api/login', {
///   method: 'POST',
///   credentials: 'include',
///   headers: { 'Content-Type': 'application/json' },
///   body: JSON.stringify({
///     email: 'user@example.com',
///     password: 'securepassword'
///   })
/// });
/// ```
#[post("/login")]
pub async fn post_login(
    login_data: web::Json<LoginRequest>,
    pool: web::Data<Arc<SqlitePool>>,
    session: Session,
) -> Res<impl Responder> {
    let db_pool: &SqlitePool = &**pool;

    let user = services::auth::authenticate_user(db_pool, &login_data.into_inner()).await?;
    session::store_session_user(
        &session,
        &SessionUser {
            id: user.id,
            name: user.name.clone(),
        },
    )?;

    Success::ok(AuthResponse {
        success: true,
        user: UserSummary::from(user),
    })
}

/// Signs the caller out. Purging an already-empty session is fine, so the
/// endpoint is idempotent.
#[post("/logout")]
pub async fn post_logout(session: Session) -> Res<impl Responder> {
    session.purge();
    Success::ok(serde_json::json!({ "success": true }))
}
