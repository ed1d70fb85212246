use std::sync::Arc;

use actix_web::{Responder, delete, get, post, put, web};
use common::{error::Res, http::Success, session::SessionUser};
use db::dtos::entry::EntryRequest;
use sqlx::SqlitePool;

use crate::services;

/// Retrieves all entries belonging to the authenticated user, newest date
/// first.
///
/// # Arguments
///
/// * `user` - The session identity of the authenticated user.
/// * `pool` - The database connection pool.
///
/// # Returns
///
/// A `Result` containing a `Success` response with the list of entries or an `AppError` if an error occurs.
#[get("")]
pub async fn get_entries(
    user: web::ReqData<SessionUser>,
    pool: web::Data<Arc<SqlitePool>>,
) -> Res<impl Responder> {
    let entries = services::entry::list_for_user(&pool, user.id).await?;
    Success::ok(serde_json::json!({ "entries": entries }))
}

/// Records a new entry for the authenticated user. Numeric fields missing
/// from the body default to 0.
///
/// # Arguments
///
/// * `user` - The session identity of the authenticated user.
/// * `pool` - The database connection pool.
/// * `req` - The entry fields.
///
/// # Returns
///
/// A `Result` containing a `Success` response with the new row id or an `AppError` if an error occurs.
#[post("")]
pub async fn post_entry(
    user: web::ReqData<SessionUser>,
    pool: web::Data<Arc<SqlitePool>>,
    req: web::Json<EntryRequest>,
) -> Res<impl Responder> {
    let id = services::entry::create(&pool, user.id, &req.into_inner()).await?;
    Success::created(serde_json::json!({ "success": true, "id": id }))
}

/// Overwrites an entry owned by the authenticated user. Responds 404 when
/// the entry does not exist or belongs to someone else.
#[put("/{id}")]
pub async fn put_entry(
    user: web::ReqData<SessionUser>,
    pool: web::Data<Arc<SqlitePool>>,
    path: web::Path<i64>,
    req: web::Json<EntryRequest>,
) -> Res<impl Responder> {
    services::entry::update(&pool, path.into_inner(), user.id, &req.into_inner()).await?;
    Success::ok(serde_json::json!({ "success": true }))
}

/// Deletes an entry owned by the authenticated user. Same 404 contract as
/// update.
#[delete("/{id}")]
pub async fn delete_entry(
    user: web::ReqData<SessionUser>,
    pool: web::Data<Arc<SqlitePool>>,
    path: web::Path<i64>,
) -> Res<impl Responder> {
    services::entry::delete(&pool, path.into_inner(), user.id).await?;
    Success::ok(serde_json::json!({ "success": true }))
}
