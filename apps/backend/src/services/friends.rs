use sea_orm::ConnectionTrait;
use tracing::debug;

use crate::auth::Identity;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::friendships;
use crate::repos::users::{self, User};

/// Add `friend_id` to the caller's friends and return the caller.
/// Adding an existing friend again changes nothing.
pub async fn add_friend<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identity: &Identity,
    friend_id: &str,
) -> Result<User, AppError> {
    if friend_id == identity.user_id() {
        return Err(AppError::invalid(
            ErrorCode::SelfFriendship,
            "You cannot befriend yourself",
        ));
    }

    if users::find_user_by_id(conn, friend_id).await?.is_none() {
        return Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"));
    }

    let inserted = friendships::add_friend(conn, identity.user_id(), friend_id).await?;
    debug!(user_id = identity.user_id(), friend_id, inserted, "friend added");

    users::find_user_by_id(conn, identity.user_id())
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))
}

pub async fn friends_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Vec<User>, AppError> {
    let ids = friendships::list_friend_ids(conn, user_id).await?;
    Ok(users::find_users_by_ids(conn, ids).await?)
}

pub async fn friend_count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<u64, AppError> {
    Ok(friendships::count_friends(conn, user_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{identity_for, seed_user, sqlite_db};

    #[tokio::test]
    async fn test_add_friend_is_idempotent() {
        let db = sqlite_db().await;
        let alice = seed_user(&db, "alice").await;
        let bob = seed_user(&db, "bob").await;

        let me = add_friend(&db, &identity_for(&alice), &bob.id).await.unwrap();
        assert_eq!(me.id, alice.id);
        add_friend(&db, &identity_for(&alice), &bob.id).await.unwrap();

        assert_eq!(friend_count(&db, &alice.id).await.unwrap(), 1);
        assert_eq!(friends_of(&db, &alice.id).await.unwrap(), vec![bob.clone()]);
        // one-directional
        assert_eq!(friend_count(&db, &bob.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cannot_befriend_self_or_missing_user() {
        let db = sqlite_db().await;
        let alice = seed_user(&db, "alice").await;

        let err = add_friend(&db, &identity_for(&alice), &alice.id)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::SelfFriendship);

        let err = add_friend(&db, &identity_for(&alice), "nobody")
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::UserNotFound);

        assert_eq!(friend_count(&db, &alice.id).await.unwrap(), 0);
    }
}
