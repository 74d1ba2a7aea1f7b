//! Friendship repository functions.

use sea_orm::ConnectionTrait;

use crate::adapters::friendships_sea as friendships_adapter;
use crate::errors::domain::DomainError;

/// Record `user_id -> friend_id`; returns false when it already existed.
pub async fn add_friend<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
    friend_id: &str,
) -> Result<bool, DomainError> {
    Ok(friendships_adapter::insert_friendship(conn, user_id, friend_id).await?)
}

pub async fn list_friend_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<String>, DomainError> {
    Ok(friendships_adapter::list_friend_ids(conn, user_id).await?)
}

pub async fn count_friends<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<u64, DomainError> {
    Ok(friendships_adapter::count_friends(conn, user_id).await?)
}
