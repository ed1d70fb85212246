use actix_session::{SessionMiddleware, config::PersistentSession, storage::CookieSessionStore};
use actix_web::{
    cookie::{Key, time::Duration},
    web,
};

use middleware::auth::AuthMiddleware;

pub mod middleware {
    pub mod auth;
}
pub mod routes {
    pub mod auth;
    pub mod session;
}
mod services {
    pub(crate) mod auth;
    pub(crate) mod user;
}
mod dtos {
    pub(crate) mod auth;
}

const SESSION_TTL_DAYS: i64 = 7;

/// Registers the flat auth routes (`/register`, `/login`, `/logout`,
/// `/me`) on the parent scope.
pub fn mount_auth(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::auth::post_register)
        .service(routes::auth::post_login)
        .service(routes::auth::post_logout)
        .service(routes::session::get_me);
}

/// Cookie signing key. `SESSION_SECRET` must be at least 64 bytes when
/// set; without one a fresh key is generated and every session dies with
/// the process.
pub fn session_key(secret: Option<&str>) -> Key {
    match secret {
        Some(secret) => Key::from(secret.as_bytes()),
        None => Key::generate(),
    }
}

pub fn session_middleware(cookie_secure: bool, key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(cookie_secure)
        .session_lifecycle(
            PersistentSession::default().session_ttl(Duration::days(SESSION_TTL_DAYS)),
        )
        .build()
}

// Session guard for protected scopes
pub fn auth_middleware() -> AuthMiddleware {
    AuthMiddleware::new()
}
