use std::{future::Future, pin::Pin, sync::Arc};

use actix_session::SessionExt;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use common::session;
use futures::future::{Ready, ok};

/// Guards a scope behind the session cookie. Requests without a signed-in
/// session are answered with 401 before reaching any handler; for the
/// rest, the resolved `SessionUser` is inserted into request extensions
/// for handlers to extract via `web::ReqData`.
pub struct AuthMiddleware;

impl AuthMiddleware {
    pub fn new() -> Self {
        AuthMiddleware
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Arc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<actix_web::body::BoxBody>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let user = session::get_session_user(&req.get_session());
        let srv = Arc::clone(&self.service);

        Box::pin(async move {
            match user {
                Some(user) => {
                    req.extensions_mut().insert(user);
                    srv.call(req).await.map(|res| res.map_into_boxed_body())
                }
                None => {
                    // no session - 401
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({"error": "Not authenticated"}))
                        .map_into_boxed_body();
                    Ok(req.into_response(response))
                }
            }
        })
    }
}
