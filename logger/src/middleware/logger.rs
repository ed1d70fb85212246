use std::sync::Arc;
use std::time::Instant;

use actix_session::SessionExt;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use colored::Colorize;
use common::session;
use futures::future::{LocalBoxFuture, Ready, ready};
use log::info;

/// Writes one console line per request: status, method, path, elapsed time
/// and the session user if any. The session middleware must be registered
/// after this one so it runs first.
pub struct LoggerMiddleware {}

impl LoggerMiddleware {
    pub fn new() -> Self {
        Self {}
    }
}

impl<S, B> Transform<S, ServiceRequest> for LoggerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LoggerMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(LoggerMiddlewareService {
            service: Arc::new(service),
        }))
    }
}

pub struct LoggerMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for LoggerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().to_string();
        let path = req.path().to_string();
        let user_id = session::get_session_user(&req.get_session()).map(|user| user.id);

        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            let started = Instant::now();
            let res = srv.call(req).await?;
            let status_code = res.status().as_u16();

            let colored_status = match status_code {
                200..=299 => status_code.to_string().green(),
                300..=399 => status_code.to_string().yellow(),
                400..=499 => status_code.to_string().bright_red(),
                _ => status_code.to_string().red(),
            };

            let colored_method = match method.as_str() {
                "GET" => method.blue(),
                "POST" => method.yellow(),
                "PUT" => method.purple(),
                "DELETE" => method.red(),
                _ => method.normal(),
            };

            info!(
                "[{}] {} {} {} user_id={}",
                colored_status,
                colored_method,
                path.bright_white(),
                format!("({}ms)", started.elapsed().as_millis()).bright_black(),
                user_id
                    .map_or("None".to_string(), |id| id.to_string())
                    .bright_blue(),
            );

            Ok(res)
        })
    }
}
