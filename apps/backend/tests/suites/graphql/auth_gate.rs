// Identity-bound fields refuse anonymous callers before touching data and
// never take the acting user from arguments.

use backend::repos::{friendships, thoughts};
use backend_test_support::graphql::{assert_no_errors, assert_single_error, error_codes};
use serde_json::json;

use crate::common::first_error_trace_id;
use crate::support::factory::sign_up;
use crate::support::graphql::{gql, GqlCall};
use crate::support::{create_test_app, test_state};

const ADD_THOUGHT: &str = r#"
    mutation Add($text: String!) {
        addThought(thoughtText: $text) { _id thoughtText username }
    }
"#;

#[actix_web::test]
async fn test_add_thought_without_token_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state.clone()).build().await?;

    let body = gql(&app, ADD_THOUGHT, json!({ "text": "hello" }), None).await;

    let error = assert_single_error(&body, "UNAUTHENTICATED", "Authentication required");
    assert_eq!(error["path"], json!(["addThought"]));
    assert!(body["data"]["addThought"].is_null());

    let stored = thoughts::list_thoughts(state.db()?, None).await?;
    assert!(stored.is_empty(), "anonymous mutation must not write");
    Ok(())
}

#[actix_web::test]
async fn test_add_thought_is_attributed_to_token_subject() -> Result<(), Box<dyn std::error::Error>>
{
    let state = test_state().await?;
    let app = create_test_app(state.clone()).build().await?;
    let alice = sign_up(&app, "alice").await;

    let body = gql(
        &app,
        ADD_THOUGHT,
        json!({ "text": "deep thought" }),
        Some(&alice.token),
    )
    .await;
    assert_no_errors(&body);
    assert_eq!(body["data"]["addThought"]["username"], json!(alice.username));

    let stored = thoughts::list_thoughts(state.db()?, None).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_id, alice.id);
    assert_eq!(stored[0].username, alice.username);
    Ok(())
}

#[actix_web::test]
async fn test_acting_user_argument_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state.clone()).build().await?;
    let alice = sign_up(&app, "alice").await;
    let bob = sign_up(&app, "bob").await;

    // Alice tries to post as Bob. The schema has no such argument, so the
    // whole operation is rejected at validation.
    let query = format!(
        r#"mutation {{ addThought(thoughtText: "impostor", username: "{}") {{ _id }} }}"#,
        bob.username
    );
    let body = gql(&app, &query, json!({}), Some(&alice.token)).await;

    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    assert!(body["data"].is_null());
    let stored = thoughts::list_thoughts(state.db()?, None).await?;
    assert!(stored.is_empty());
    Ok(())
}

#[actix_web::test]
async fn test_me_without_token_keeps_sibling_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let body = gql(
        &app,
        "{ users { username } me { _id } }",
        json!({}),
        None,
    )
    .await;

    assert_eq!(error_codes(&body), vec!["UNAUTHENTICATED"]);
    assert!(body["data"]["me"].is_null());
    let usernames: Vec<&str> = body["data"]["users"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|u| u["username"].as_str())
        .collect();
    assert_eq!(usernames, vec![alice.username.as_str()]);
    Ok(())
}

#[actix_web::test]
async fn test_unauthenticated_error_carries_trace_id() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;

    let (_, header_trace_id, body) = GqlCall::new("{ me { _id } }").send(&app).await;

    let header_trace_id = header_trace_id.expect("x-trace-id header");
    assert_eq!(first_error_trace_id(&body), Some(header_trace_id.as_str()));
    Ok(())
}

#[actix_web::test]
async fn test_every_identity_bound_field_is_guarded() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state.clone()).build().await?;
    let alice = sign_up(&app, "alice").await;

    for query in [
        "{ me { _id } }".to_string(),
        r#"mutation { addThought(thoughtText: "x") { _id } }"#.to_string(),
        r#"mutation { addReaction(thoughtId: "missing", reactionBody: "x") { _id } }"#
            .to_string(),
        format!(r#"mutation {{ addFriend(friendId: "{}") {{ _id }} }}"#, alice.id),
    ] {
        let body = gql(&app, &query, json!({}), None).await;
        assert_eq!(error_codes(&body), vec!["UNAUTHENTICATED"], "query: {query}");
    }

    assert_eq!(friendships::count_friends(state.db()?, &alice.id).await?, 0);
    assert!(thoughts::list_thoughts(state.db()?, None).await?.is_empty());
    Ok(())
}
