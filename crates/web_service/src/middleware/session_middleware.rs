use actix_web::{
    cookie::Cookie,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorInternalServerError,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use tracing::Instrument;
use uuid::Uuid;

/// Name of the cookie carrying the opaque session key.
pub const SESSION_COOKIE: &str = "todo_session";

/// Middleware resolving the per-browser session key.
///
/// Reads the session cookie (minting a fresh key when it is absent), stores
/// the key in request extensions so handlers can extract it, and sets the
/// cookie on the response when the key was freshly minted. Each request is
/// instrumented with a tracing span carrying the truncated key.
pub struct SessionMiddleware;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct SessionMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let existing = req
            .cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string());
        let fresh = existing.is_none();
        let key = existing.unwrap_or_else(|| Uuid::new_v4().to_string());

        req.extensions_mut().insert(SessionKey(key.clone()));

        let key_prefix: String = key.chars().take(8).collect();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let span = tracing::info_span!(
                "http_request",
                session = %key_prefix,
                method = %method,
                path = %path
            );

            async move {
                tracing::debug!("Request received - method={}, path={}", method, path);

                let mut res = service.call(req).await?;

                if fresh {
                    let cookie = Cookie::build(SESSION_COOKIE, key)
                        .path("/")
                        .http_only(true)
                        .finish();
                    res.response_mut()
                        .add_cookie(&cookie)
                        .map_err(ErrorInternalServerError)?;
                }

                tracing::debug!("Request completed - status={}", res.status());

                Ok(res)
            }
            .instrument(span)
            .await
        })
    }
}

/// Wrapper type for the session key stored in request extensions
#[derive(Clone, Debug)]
pub struct SessionKey(pub String);

impl SessionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for SessionKey {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<SessionKey>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("session key missing from request")),
        )
    }
}
