use async_graphql::{Context, ErrorExtensions};
use sea_orm::DatabaseConnection;

use crate::auth::{Identity, RequestContext};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Convert service results into field errors carrying `extensions.code`.
pub trait GqlResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T> GqlResultExt<T> for Result<T, AppError> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}

/// The verified caller for this request, or an `UNAUTHENTICATED` field
/// error. Resolvers that act on behalf of a user call this first.
pub fn require_identity<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Identity> {
    match ctx
        .data_opt::<RequestContext>()
        .and_then(RequestContext::identity)
    {
        Some(identity) => Ok(identity),
        None => {
            security::unauthenticated_access(ctx.field().name());
            Err(AppError::unauthorized().extend())
        }
    }
}

pub fn db<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a DatabaseConnection> {
    ctx.data::<AppState>()?.db().gql()
}

pub fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AppState> {
    ctx.data::<AppState>()
}
