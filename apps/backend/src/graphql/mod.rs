//! GraphQL schema: object types, query and mutation roots, and the
//! authorization guard resolvers call before touching identity-bound data.

pub mod guard;
pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::state::app_state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema once at startup. `AppState` is schema-wide data; the
/// per-request `RequestContext` is attached to each request by the handler.
pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}
