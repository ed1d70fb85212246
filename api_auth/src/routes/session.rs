use actix_session::Session;
use actix_web::{Responder, get, web};
use common::session;
use serde_json::json;

/// Resolves the caller's identity from the session cookie alone; the
/// database is never consulted. Unauthenticated callers get `user: null`
/// rather than an error so the dashboard can render its signed-out state.
#[get("/me")]
pub async fn get_me(session: Session) -> impl Responder {
    match session::get_session_user(&session) {
        Some(user) => web::Json(json!({ "user": user })),
        None => web::Json(json!({ "user": null })),
    }
}
