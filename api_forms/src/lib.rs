use actix_web::web;

pub mod routes {
    pub mod form;
}
mod services {
    pub(crate) mod ingest;
}
mod dtos {
    pub(crate) mod form;
}

pub fn mount_webhook() -> actix_web::Scope {
    web::scope("/webhook")
        .service(routes::form::post_google_form)
        .service(routes::form::get_webhook_entries)
}
pub fn mount_forms() -> actix_web::Scope {
    web::scope("/forms").service(routes::form::get_form_entries)
}
