//! Thought repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::thoughts_sea as thoughts_adapter;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Thought {
    pub id: String,
    pub thought_text: String,
    pub user_id: String,
    pub username: String,
    pub created_at: time::OffsetDateTime,
}

pub async fn create_thought<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    username: &str,
    thought_text: &str,
) -> Result<Thought, DomainError> {
    let dto = thoughts_adapter::ThoughtCreate {
        user_id: user_id.to_string(),
        username: username.to_string(),
        thought_text: thought_text.to_string(),
    };
    let thought = thoughts_adapter::create_thought(conn, dto).await?;
    Ok(Thought::from(thought))
}

pub async fn find_thought_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<Option<Thought>, DomainError> {
    let thought = thoughts_adapter::find_thought_by_id(conn, thought_id).await?;
    Ok(thought.map(Thought::from))
}

pub async fn list_thoughts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: Option<&str>,
) -> Result<Vec<Thought>, DomainError> {
    let thoughts = thoughts_adapter::list_thoughts(conn, username).await?;
    Ok(thoughts.into_iter().map(Thought::from).collect())
}

impl From<crate::entities::thoughts::Model> for Thought {
    fn from(model: crate::entities::thoughts::Model) -> Self {
        Self {
            id: model.id,
            thought_text: model.thought_text,
            user_id: model.user_id,
            username: model.username,
            created_at: model.created_at,
        }
    }
}
