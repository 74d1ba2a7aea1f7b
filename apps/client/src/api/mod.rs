//! GraphQL client: documents, response types and transport.

pub mod client;
pub mod queries;
pub mod types;

pub use client::GraphqlClient;
