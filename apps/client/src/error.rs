use std::fmt;

use thiserror::Error;

use crate::api::types::GraphqlError;
use crate::session::SessionError;

/// GraphQL errors returned by the server, in response order.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphqlErrors(pub Vec<GraphqlError>);

impl GraphqlErrors {
    pub fn codes(&self) -> Vec<&str> {
        self.0.iter().filter_map(GraphqlError::code).collect()
    }

    pub fn has_code(&self, code: &str) -> bool {
        self.codes().contains(&code)
    }
}

impl fmt::Display for GraphqlErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .0
            .iter()
            .map(|e| match e.code() {
                Some(code) => format!("{} ({code})", e.message),
                None => e.message.clone(),
            })
            .collect();
        f.write_str(&messages.join("; "))
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Graphql(GraphqlErrors),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// True when the server refused the operation for lack of a valid session.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ClientError::Graphql(errors) if errors.has_code("UNAUTHENTICATED"))
    }
}
