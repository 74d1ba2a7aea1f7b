use std::time::SystemTime;

use async_graphql::{Context, Object, ID};

use super::guard::{app_state, db, require_identity, GqlResultExt};
use super::types::{AuthObject, ThoughtObject, UserObject};
use crate::services::users::{AuthPayload, NewUser};
use crate::services::{friends, thoughts, users};

#[derive(Default)]
pub struct MutationRoot;

impl From<AuthPayload> for AuthObject {
    fn from(payload: AuthPayload) -> Self {
        Self {
            token: payload.token,
            user: UserObject(payload.user),
        }
    }
}

#[Object]
impl MutationRoot {
    async fn login(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> async_graphql::Result<AuthObject> {
        let state = app_state(ctx)?;
        let payload = users::login(
            state.db().gql()?,
            &state.security,
            SystemTime::now(),
            &email,
            &password,
        )
        .await
        .gql()?;
        Ok(payload.into())
    }

    async fn add_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> async_graphql::Result<AuthObject> {
        let state = app_state(ctx)?;
        let input = NewUser {
            username,
            email,
            password,
        };
        let payload = users::signup(state.db().gql()?, &state.security, SystemTime::now(), input)
            .await
            .gql()?;
        Ok(payload.into())
    }

    async fn add_thought(
        &self,
        ctx: &Context<'_>,
        thought_text: String,
    ) -> async_graphql::Result<Option<ThoughtObject>> {
        let identity = require_identity(ctx)?;
        let thought = thoughts::add_thought(db(ctx)?, identity, &thought_text)
            .await
            .gql()?;
        Ok(Some(ThoughtObject(thought)))
    }

    async fn add_reaction(
        &self,
        ctx: &Context<'_>,
        thought_id: ID,
        reaction_body: String,
    ) -> async_graphql::Result<Option<ThoughtObject>> {
        let identity = require_identity(ctx)?;
        let thought = thoughts::add_reaction(db(ctx)?, identity, &thought_id, &reaction_body)
            .await
            .gql()?;
        Ok(Some(ThoughtObject(thought)))
    }

    async fn add_friend(
        &self,
        ctx: &Context<'_>,
        friend_id: ID,
    ) -> async_graphql::Result<Option<UserObject>> {
        let identity = require_identity(ctx)?;
        let user = friends::add_friend(db(ctx)?, identity, &friend_id)
            .await
            .gql()?;
        Ok(Some(UserObject(user)))
    }
}
