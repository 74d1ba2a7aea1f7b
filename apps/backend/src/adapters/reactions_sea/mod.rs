//! SeaORM adapter for reactions.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use ulid::Ulid;

use crate::entities::reactions;

pub mod dto;

pub use dto::ReactionCreate;

pub async fn create_reaction<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ReactionCreate,
) -> Result<reactions::Model, sea_orm::DbErr> {
    let reaction_active = reactions::ActiveModel {
        id: Set(Ulid::new().to_string()),
        thought_id: Set(dto.thought_id),
        reaction_body: Set(dto.reaction_body),
        username: Set(dto.username),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    reaction_active.insert(conn).await
}

/// Oldest first, the order they were posted in.
pub async fn list_for_thought<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<Vec<reactions::Model>, sea_orm::DbErr> {
    reactions::Entity::find()
        .filter(reactions::Column::ThoughtId.eq(thought_id))
        .order_by_asc(reactions::Column::CreatedAt)
        .order_by_asc(reactions::Column::Id)
        .all(conn)
        .await
}

pub async fn count_for_thought<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    reactions::Entity::find()
        .filter(reactions::Column::ThoughtId.eq(thought_id))
        .count(conn)
        .await
}
