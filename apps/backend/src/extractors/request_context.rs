use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::RequestContext;
use crate::error::AppError;
use crate::middleware::request_context::context_for_request;
use crate::state::app_state::AppState;

/// Reads the context `BuildRequestContext` stored in extensions. Routes
/// mounted without the middleware get one built from the headers instead,
/// so extraction never fails.
impl FromRequest for RequestContext {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        if let Some(ctx) = req.extensions().get::<RequestContext>() {
            return ready(Ok(ctx.clone()));
        }

        let state = req.app_data::<web::Data<AppState>>();
        ready(Ok(context_for_request(
            req.headers().get(header::AUTHORIZATION),
            state.map(|data| data.get_ref()),
        )))
    }
}
