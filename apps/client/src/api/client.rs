use reqwest::header::{HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};

use super::queries;
use super::types::{
    AddFriendData, AddReactionData, AddThoughtData, AddUserData, Auth, GraphqlResponse,
    LoginData, MeData, Thought, ThoughtData, ThoughtsData, User, UserData,
};
use crate::error::{ClientError, GraphqlErrors};
use crate::navigation::Navigator;
use crate::session::AuthSession;
use crate::storage::TokenStore;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/graphql";

/// POSTs `{query, variables}` to the GraphQL endpoint, attaching the session
/// token as a bearer credential when there is one.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("deep-thoughts/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: None,
        })
    }

    /// Use whatever token `session` holds. Expired tokens are sent as well;
    /// the server decides what they are worth.
    pub fn with_session<S: TokenStore, N: Navigator>(
        mut self,
        session: &AuthSession<S, N>,
    ) -> Result<Self, ClientError> {
        self.token = session.token()?;
        Ok(self)
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn build_request(&self, query: &str, variables: Value) -> reqwest::RequestBuilder {
        let request = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }));

        match self
            .token
            .as_deref()
            .and_then(|t| HeaderValue::from_str(&format!("Bearer {t}")).ok())
        {
            Some(value) => request.header(AUTHORIZATION, value),
            None => request,
        }
    }

    /// Run one operation. Any `errors` entry fails the call, even when partial
    /// `data` came back.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, ClientError> {
        let response = self
            .build_request(query, variables)
            .send()
            .await?
            .error_for_status()?;
        let body: GraphqlResponse<T> = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        decode_response(body)
    }

    pub async fn thoughts(&self, username: Option<&str>) -> Result<Vec<Thought>, ClientError> {
        let data: ThoughtsData = self
            .execute(queries::QUERY_THOUGHTS, json!({ "username": username }))
            .await?;
        Ok(data.thoughts)
    }

    pub async fn thought(&self, id: &str) -> Result<Option<Thought>, ClientError> {
        let data: ThoughtData = self
            .execute(queries::QUERY_THOUGHT, json!({ "id": id }))
            .await?;
        Ok(data.thought)
    }

    pub async fn user(&self, username: &str) -> Result<Option<User>, ClientError> {
        let data: UserData = self
            .execute(queries::QUERY_USER, json!({ "username": username }))
            .await?;
        Ok(data.user)
    }

    pub async fn me(&self) -> Result<Option<User>, ClientError> {
        let data: MeData = self.execute(queries::QUERY_ME, json!({})).await?;
        Ok(data.me)
    }

    pub async fn me_basic(&self) -> Result<Option<User>, ClientError> {
        let data: MeData = self.execute(queries::QUERY_ME_BASIC, json!({})).await?;
        Ok(data.me)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Auth, ClientError> {
        let data: LoginData = self
            .execute(
                queries::LOGIN_USER,
                json!({ "email": email, "password": password }),
            )
            .await?;
        Ok(data.login)
    }

    pub async fn add_user(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Auth, ClientError> {
        let data: AddUserData = self
            .execute(
                queries::ADD_USER,
                json!({ "username": username, "email": email, "password": password }),
            )
            .await?;
        Ok(data.add_user)
    }

    pub async fn add_thought(&self, thought_text: &str) -> Result<Thought, ClientError> {
        let data: AddThoughtData = self
            .execute(queries::ADD_THOUGHT, json!({ "thoughtText": thought_text }))
            .await?;
        data.add_thought
            .ok_or_else(|| ClientError::Decode("addThought returned null".to_string()))
    }

    pub async fn add_reaction(
        &self,
        thought_id: &str,
        reaction_body: &str,
    ) -> Result<Thought, ClientError> {
        let data: AddReactionData = self
            .execute(
                queries::ADD_REACTION,
                json!({ "thoughtId": thought_id, "reactionBody": reaction_body }),
            )
            .await?;
        data.add_reaction
            .ok_or_else(|| ClientError::Decode("addReaction returned null".to_string()))
    }

    pub async fn add_friend(&self, friend_id: &str) -> Result<User, ClientError> {
        let data: AddFriendData = self
            .execute(queries::ADD_FRIEND, json!({ "id": friend_id }))
            .await?;
        data.add_friend
            .ok_or_else(|| ClientError::Decode("addFriend returned null".to_string()))
    }
}

fn decode_response<T>(body: GraphqlResponse<T>) -> Result<T, ClientError> {
    if !body.errors.is_empty() {
        let errors = GraphqlErrors(body.errors);
        if errors.has_code("UNAUTHENTICATED") {
            warn!("server rejected the session; log in again");
        }
        debug!(codes = ?errors.codes(), "graphql errors");
        return Err(ClientError::Graphql(errors));
    }
    body.data
        .ok_or_else(|| ClientError::Decode("response has neither data nor errors".to_string()))
}
