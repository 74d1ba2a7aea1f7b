//! Reaction repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::reactions_sea as reactions_adapter;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    pub id: String,
    pub thought_id: String,
    pub reaction_body: String,
    pub username: String,
    pub created_at: time::OffsetDateTime,
}

pub async fn create_reaction<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
    username: &str,
    reaction_body: &str,
) -> Result<Reaction, DomainError> {
    let dto = reactions_adapter::ReactionCreate {
        thought_id: thought_id.to_string(),
        username: username.to_string(),
        reaction_body: reaction_body.to_string(),
    };
    let reaction = reactions_adapter::create_reaction(conn, dto).await?;
    Ok(Reaction::from(reaction))
}

pub async fn list_for_thought<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<Vec<Reaction>, DomainError> {
    let reactions = reactions_adapter::list_for_thought(conn, thought_id).await?;
    Ok(reactions.into_iter().map(Reaction::from).collect())
}

pub async fn count_for_thought<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<u64, DomainError> {
    Ok(reactions_adapter::count_for_thought(conn, thought_id).await?)
}

impl From<crate::entities::reactions::Model> for Reaction {
    fn from(model: crate::entities::reactions::Model) -> Self {
        Self {
            id: model.id,
            thought_id: model.thought_id,
            reaction_body: model.reaction_body,
            username: model.username,
            created_at: model.created_at,
        }
    }
}
