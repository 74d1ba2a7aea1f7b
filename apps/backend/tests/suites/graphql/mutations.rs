// Authenticated mutations: reactions, friendships and their validation.

use backend_test_support::graphql::{assert_no_errors, assert_single_error};
use serde_json::json;

use crate::support::factory::sign_up;
use crate::support::graphql::gql;
use crate::support::{create_test_app, test_state};

const POST: &str = r#"mutation Post($text: String!) { addThought(thoughtText: $text) { _id } }"#;

const REACT: &str = r#"
    mutation React($id: ID!, $body: String!) {
        addReaction(thoughtId: $id, reactionBody: $body) {
            _id
            reactionCount
            reactions { reactionBody username }
        }
    }
"#;

const BEFRIEND: &str = r#"
    mutation Befriend($id: ID!) {
        addFriend(friendId: $id) { _id friendCount friends { username } }
    }
"#;

#[actix_web::test]
async fn test_reaction_is_attributed_to_caller() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;
    let bob = sign_up(&app, "bob").await;

    let posted = gql(&app, POST, json!({ "text": "react to me" }), Some(&alice.token)).await;
    let id = posted["data"]["addThought"]["_id"].as_str().unwrap().to_string();

    let body = gql(
        &app,
        REACT,
        json!({ "id": id, "body": "nice" }),
        Some(&bob.token),
    )
    .await;
    assert_no_errors(&body);

    let thought = &body["data"]["addReaction"];
    assert_eq!(thought["_id"], json!(id));
    assert_eq!(thought["reactionCount"], json!(1));
    assert_eq!(
        thought["reactions"],
        json!([{ "reactionBody": "nice", "username": bob.username }])
    );
    Ok(())
}

#[actix_web::test]
async fn test_reaction_to_unknown_thought() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let body = gql(
        &app,
        REACT,
        json!({ "id": "01J00000000000000000000000", "body": "hello?" }),
        Some(&alice.token),
    )
    .await;
    assert_single_error(&body, "THOUGHT_NOT_FOUND", "Thought not found");
    Ok(())
}

#[actix_web::test]
async fn test_thought_text_limits() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let blank = gql(&app, POST, json!({ "text": "   " }), Some(&alice.token)).await;
    assert_single_error(&blank, "INVALID_THOUGHT_TEXT", "must not be empty");

    let long = "x".repeat(281);
    let too_long = gql(&app, POST, json!({ "text": long }), Some(&alice.token)).await;
    assert_single_error(&too_long, "INVALID_THOUGHT_TEXT", "at most 280");

    let exact = "y".repeat(280);
    let ok = gql(&app, POST, json!({ "text": exact }), Some(&alice.token)).await;
    assert_no_errors(&ok);
    Ok(())
}

#[actix_web::test]
async fn test_add_friend_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;
    let bob = sign_up(&app, "bob").await;

    for _ in 0..2 {
        let body = gql(&app, BEFRIEND, json!({ "id": bob.id }), Some(&alice.token)).await;
        assert_no_errors(&body);
        let me = &body["data"]["addFriend"];
        assert_eq!(me["_id"], json!(alice.id));
        assert_eq!(me["friendCount"], json!(1));
        assert_eq!(me["friends"], json!([{ "username": bob.username }]));
    }
    Ok(())
}

#[actix_web::test]
async fn test_add_friend_rejects_self_and_unknown() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let own = gql(&app, BEFRIEND, json!({ "id": alice.id }), Some(&alice.token)).await;
    assert_single_error(&own, "SELF_FRIENDSHIP", "cannot befriend yourself");

    let unknown = gql(
        &app,
        BEFRIEND,
        json!({ "id": "01J00000000000000000000000" }),
        Some(&alice.token),
    )
    .await;
    assert_single_error(&unknown, "USER_NOT_FOUND", "User not found");
    Ok(())
}
