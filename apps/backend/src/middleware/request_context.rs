//! Builds the per-request `RequestContext` from the `Authorization` header.
//!
//! Never rejects: anything short of a valid, unexpired bearer token yields
//! an anonymous context and the request continues. Resolvers decide what
//! anonymous callers may do.

use std::time::SystemTime;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use session_token::{InvalidToken, SecurityConfig};
use tracing::{debug, warn};

use crate::auth::jwt::verify_access_token;
use crate::auth::RequestContext;
use crate::state::app_state::AppState;

/// Why a request ended up anonymous. Logged, never returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonymousReason {
    MissingHeader,
    NotUtf8,
    WrongScheme,
    EmptyToken,
    ExtraSegments,
    Token(InvalidToken),
}

impl AnonymousReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnonymousReason::MissingHeader => "missing_header",
            AnonymousReason::NotUtf8 => "not_utf8",
            AnonymousReason::WrongScheme => "wrong_scheme",
            AnonymousReason::EmptyToken => "empty_token",
            AnonymousReason::ExtraSegments => "extra_segments",
            AnonymousReason::Token(invalid) => invalid.as_str(),
        }
    }
}

/// Accept exactly `Bearer <token>`.
pub fn extract_bearer(header_value: Option<&HeaderValue>) -> Result<&str, AnonymousReason> {
    let value = header_value.ok_or(AnonymousReason::MissingHeader)?;
    let value = value.to_str().map_err(|_| AnonymousReason::NotUtf8)?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        (Some("Bearer"), None, _) => Err(AnonymousReason::EmptyToken),
        (Some("Bearer"), Some(_), Some(_)) => Err(AnonymousReason::ExtraSegments),
        _ => Err(AnonymousReason::WrongScheme),
    }
}

/// Header → context. The reason is `Some` exactly when the context is anonymous.
pub fn build_request_context(
    header_value: Option<&HeaderValue>,
    security: &SecurityConfig,
    now: SystemTime,
) -> (RequestContext, Option<AnonymousReason>) {
    let token = match extract_bearer(header_value) {
        Ok(token) => token,
        Err(reason) => return (RequestContext::anonymous(), Some(reason)),
    };

    match verify_access_token(token, security, now) {
        Ok(claims) => (RequestContext::authenticated(claims, token), None),
        Err(invalid) => (
            RequestContext::anonymous(),
            Some(AnonymousReason::Token(invalid)),
        ),
    }
}

/// Context for `req` using the app's security settings; anonymous when the
/// app has no `AppState`.
pub fn context_for_request(
    header_value: Option<&HeaderValue>,
    state: Option<&AppState>,
) -> RequestContext {
    let Some(state) = state else {
        warn!("AppState not available; treating request as anonymous");
        return RequestContext::anonymous();
    };

    let (ctx, reason) = build_request_context(header_value, &state.security, SystemTime::now());
    match (ctx.identity(), reason) {
        (Some(identity), _) => debug!(user_id = identity.user_id(), "request authenticated"),
        // a missing header is the normal anonymous case
        (None, Some(AnonymousReason::MissingHeader)) | (None, None) => {}
        (None, Some(reason)) => debug!(reason = reason.as_str(), "bearer token rejected"),
    }
    ctx
}

pub struct BuildRequestContext;

impl<S, B> Transform<S, ServiceRequest> for BuildRequestContext
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BuildRequestContextMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BuildRequestContextMiddleware { service }))
    }
}

pub struct BuildRequestContextMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for BuildRequestContextMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let ctx = context_for_request(
            req.headers().get(header::AUTHORIZATION),
            state.as_deref().map(|v| &**v),
        );

        // insert before calling downstream so extractors can see it
        req.extensions_mut().insert(ctx);
        Box::pin(self.service.call(req))
    }
}
