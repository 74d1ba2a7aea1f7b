use async_graphql::{Context, Object, ID};

use super::guard::{db, require_identity, GqlResultExt};
use super::types::{ThoughtObject, UserObject};
use crate::services::{thoughts, users};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The signed-in user.
    async fn me(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<UserObject>> {
        let identity = require_identity(ctx)?;
        let user = users::get_user(db(ctx)?, identity.user_id()).await.gql()?;
        Ok(Some(UserObject(user)))
    }

    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<UserObject>> {
        let list = users::list_users(db(ctx)?).await.gql()?;
        Ok(list.into_iter().map(UserObject).collect())
    }

    async fn user(
        &self,
        ctx: &Context<'_>,
        username: String,
    ) -> async_graphql::Result<Option<UserObject>> {
        let user = users::find_by_username(db(ctx)?, &username).await.gql()?;
        Ok(user.map(UserObject))
    }

    /// Newest first, optionally limited to one author.
    async fn thoughts(
        &self,
        ctx: &Context<'_>,
        username: Option<String>,
    ) -> async_graphql::Result<Vec<ThoughtObject>> {
        let list = thoughts::list_thoughts(db(ctx)?, username.as_deref())
            .await
            .gql()?;
        Ok(list.into_iter().map(ThoughtObject).collect())
    }

    async fn thought(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "_id")] id: ID,
    ) -> async_graphql::Result<Option<ThoughtObject>> {
        let thought = thoughts::get_thought(db(ctx)?, &id).await.gql()?;
        Ok(thought.map(ThoughtObject))
    }
}
