//! SeaORM adapter for the friendship edge set.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set};

use crate::entities::friendships;

/// Insert `user_id -> friend_id` unless it already exists.
/// Returns whether a row was written.
pub async fn insert_friendship<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    friend_id: &str,
) -> Result<bool, sea_orm::DbErr> {
    let edge = friendships::ActiveModel {
        user_id: Set(user_id.to_string()),
        friend_id: Set(friend_id.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };

    let rows = friendships::Entity::insert(edge)
        .on_conflict(
            OnConflict::columns([friendships::Column::UserId, friendships::Column::FriendId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(rows == 1)
}

pub async fn list_friend_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<String>, sea_orm::DbErr> {
    friendships::Entity::find()
        .select_only()
        .column(friendships::Column::FriendId)
        .filter(friendships::Column::UserId.eq(user_id))
        .into_tuple::<String>()
        .all(conn)
        .await
}

pub async fn count_friends<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<u64, sea_orm::DbErr> {
    friendships::Entity::find()
        .filter(friendships::Column::UserId.eq(user_id))
        .count(conn)
        .await
}
