//! SeaORM adapter for thoughts.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use ulid::Ulid;

use crate::entities::thoughts;

pub mod dto;

pub use dto::ThoughtCreate;

pub async fn create_thought<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ThoughtCreate,
) -> Result<thoughts::Model, sea_orm::DbErr> {
    let thought_active = thoughts::ActiveModel {
        id: Set(Ulid::new().to_string()),
        thought_text: Set(dto.thought_text),
        user_id: Set(dto.user_id),
        username: Set(dto.username),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    thought_active.insert(conn).await
}

pub async fn find_thought_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<Option<thoughts::Model>, sea_orm::DbErr> {
    thoughts::Entity::find_by_id(thought_id.to_string())
        .one(conn)
        .await
}

/// Newest first; id order breaks timestamp ties.
pub async fn list_thoughts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: Option<&str>,
) -> Result<Vec<thoughts::Model>, sea_orm::DbErr> {
    let mut query = thoughts::Entity::find();
    if let Some(username) = username {
        query = query.filter(thoughts::Column::Username.eq(username));
    }
    query
        .order_by_desc(thoughts::Column::CreatedAt)
        .order_by_desc(thoughts::Column::Id)
        .all(conn)
        .await
}
