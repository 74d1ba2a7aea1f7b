use sea_orm::ConnectionTrait;
use tracing::debug;

use super::MAX_TEXT_CHARS;
use crate::auth::Identity;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::reactions::{self, Reaction};
use crate::repos::thoughts::{self, Thought};

fn validate_text(text: &str, code: ErrorCode, what: &str) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::invalid(code, format!("{what} must not be empty")));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(AppError::invalid(
            code,
            format!("{what} must be at most {MAX_TEXT_CHARS} characters"),
        ));
    }
    Ok(())
}

/// Post a thought as the verified caller.
pub async fn add_thought<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identity: &Identity,
    thought_text: &str,
) -> Result<Thought, AppError> {
    validate_text(thought_text, ErrorCode::InvalidThoughtText, "Thought text")?;

    let thought =
        thoughts::create_thought(conn, identity.user_id(), identity.username(), thought_text)
            .await?;
    debug!(thought_id = %thought.id, user_id = identity.user_id(), "thought added");
    Ok(thought)
}

/// React to an existing thought as the verified caller; returns the thought.
pub async fn add_reaction<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    identity: &Identity,
    thought_id: &str,
    reaction_body: &str,
) -> Result<Thought, AppError> {
    validate_text(reaction_body, ErrorCode::InvalidReactionBody, "Reaction body")?;

    let thought = get_thought(conn, thought_id)
        .await?
        .ok_or_else(|| AppError::not_found(ErrorCode::ThoughtNotFound, "Thought not found"))?;

    let reaction =
        reactions::create_reaction(conn, &thought.id, identity.username(), reaction_body).await?;
    debug!(reaction_id = %reaction.id, thought_id = %thought.id, "reaction added");
    Ok(thought)
}

pub async fn get_thought<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<Option<Thought>, AppError> {
    Ok(thoughts::find_thought_by_id(conn, thought_id).await?)
}

/// All thoughts, or one user's, newest first.
pub async fn list_thoughts<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: Option<&str>,
) -> Result<Vec<Thought>, AppError> {
    Ok(thoughts::list_thoughts(conn, username).await?)
}

pub async fn reactions_for<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<Vec<Reaction>, AppError> {
    Ok(reactions::list_for_thought(conn, thought_id).await?)
}

pub async fn reaction_count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    thought_id: &str,
) -> Result<u64, AppError> {
    Ok(reactions::count_for_thought(conn, thought_id).await?)
}
