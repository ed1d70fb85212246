use actix_web::web;

pub mod routes {
    pub mod entry;
}
mod services {
    pub(crate) mod entry;
}

/// The per-user entries CRUD. Mount behind the session guard; every
/// handler expects a `SessionUser` in request extensions.
pub fn mount_entries() -> actix_web::Scope {
    web::scope("/entries")
        .service(routes::entry::get_entries)
        .service(routes::entry::post_entry)
        .service(routes::entry::put_entry)
        .service(routes::entry::delete_entry)
}
