use async_graphql::{Context, Object, SimpleObject, ID};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::guard::{db, GqlResultExt};
use crate::error::AppError;
use crate::repos::reactions::Reaction;
use crate::repos::thoughts::Thought;
use crate::repos::users::User;
use crate::services::{friends, thoughts};

fn rfc3339(at: OffsetDateTime) -> async_graphql::Result<String> {
    at.format(&Rfc3339)
        .map_err(|e| AppError::internal(format!("timestamp formatting failed: {e}")))
        .gql()
}

fn gql_int(n: u64) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

pub struct UserObject(pub User);

#[Object(name = "User")]
impl UserObject {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn friend_count(&self, ctx: &Context<'_>) -> async_graphql::Result<i32> {
        let count = friends::friend_count(db(ctx)?, &self.0.id).await.gql()?;
        Ok(gql_int(count))
    }

    async fn thoughts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<ThoughtObject>> {
        let list = thoughts::list_thoughts(db(ctx)?, Some(self.0.username.as_str()))
            .await
            .gql()?;
        Ok(list.into_iter().map(ThoughtObject).collect())
    }

    async fn friends(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<UserObject>> {
        let list = friends::friends_of(db(ctx)?, &self.0.id).await.gql()?;
        Ok(list.into_iter().map(UserObject).collect())
    }
}

pub struct ThoughtObject(pub Thought);

#[Object(name = "Thought")]
impl ThoughtObject {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn thought_text(&self) -> &str {
        &self.0.thought_text
    }

    async fn created_at(&self) -> async_graphql::Result<String> {
        rfc3339(self.0.created_at)
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn reaction_count(&self, ctx: &Context<'_>) -> async_graphql::Result<i32> {
        let count = thoughts::reaction_count(db(ctx)?, &self.0.id).await.gql()?;
        Ok(gql_int(count))
    }

    async fn reactions(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<ReactionObject>> {
        let list = thoughts::reactions_for(db(ctx)?, &self.0.id).await.gql()?;
        Ok(list.into_iter().map(ReactionObject).collect())
    }
}

pub struct ReactionObject(pub Reaction);

#[Object(name = "Reaction")]
impl ReactionObject {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn reaction_body(&self) -> &str {
        &self.0.reaction_body
    }

    async fn created_at(&self) -> async_graphql::Result<String> {
        rfc3339(self.0.created_at)
    }

    async fn username(&self) -> &str {
        &self.0.username
    }
}

/// Result of login and signup.
#[derive(SimpleObject)]
#[graphql(name = "Auth")]
pub struct AuthObject {
    pub token: String,
    pub user: UserObject,
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_rfc3339_timestamps() {
        let formatted = rfc3339(datetime!(2024-03-01 12:30:00 UTC)).unwrap();
        assert_eq!(formatted, "2024-03-01T12:30:00Z");
    }

    #[test]
    fn test_counts_saturate() {
        assert_eq!(gql_int(3), 3);
        assert_eq!(gql_int(u64::MAX), i32::MAX);
    }
}
