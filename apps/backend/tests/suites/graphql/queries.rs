// Read-side queries: feed ordering, lookups and nested fields.

use backend_test_support::graphql::assert_no_errors;
use serde_json::{json, Value};

use crate::support::factory::sign_up;
use crate::support::graphql::gql;
use crate::support::{create_test_app, test_state};

const POST: &str = r#"mutation Post($text: String!) { addThought(thoughtText: $text) { _id } }"#;

fn texts(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["thoughtText"].as_str())
        .collect()
}

#[actix_web::test]
async fn test_thoughts_are_newest_first_and_filterable() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;
    let bob = sign_up(&app, "bob").await;

    for (who, text) in [(&alice, "first"), (&bob, "second"), (&alice, "third")] {
        let body = gql(&app, POST, json!({ "text": text }), Some(&who.token)).await;
        assert_no_errors(&body);
    }

    let all = gql(&app, "{ thoughts { thoughtText } }", json!({}), None).await;
    assert_no_errors(&all);
    assert_eq!(texts(&all["data"]["thoughts"]), vec!["third", "second", "first"]);

    let mine = gql(
        &app,
        "query Mine($u: String) { thoughts(username: $u) { thoughtText username } }",
        json!({ "u": alice.username }),
        None,
    )
    .await;
    assert_no_errors(&mine);
    assert_eq!(texts(&mine["data"]["thoughts"]), vec!["third", "first"]);
    Ok(())
}

#[actix_web::test]
async fn test_thought_lookup_and_missing_thought() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let posted = gql(&app, POST, json!({ "text": "findable" }), Some(&alice.token)).await;
    let id = posted["data"]["addThought"]["_id"].as_str().unwrap().to_string();

    let found = gql(
        &app,
        r#"query One($id: ID!) { thought(_id: $id) { _id thoughtText createdAt reactionCount reactions { _id } } }"#,
        json!({ "id": id }),
        None,
    )
    .await;
    assert_no_errors(&found);
    let thought = &found["data"]["thought"];
    assert_eq!(thought["thoughtText"], json!("findable"));
    assert_eq!(thought["reactionCount"], json!(0));
    assert!(thought["createdAt"].as_str().unwrap().contains('T'));

    let missing = gql(
        &app,
        r#"{ thought(_id: "01J00000000000000000000000") { _id } }"#,
        json!({}),
        None,
    )
    .await;
    assert_no_errors(&missing);
    assert!(missing["data"]["thought"].is_null());
    Ok(())
}

#[actix_web::test]
async fn test_me_returns_token_subject_with_nested_data() -> Result<(), Box<dyn std::error::Error>>
{
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;
    gql(&app, POST, json!({ "text": "mine" }), Some(&alice.token)).await;

    let body = gql(
        &app,
        "{ me { _id username email friendCount thoughts { thoughtText } friends { _id } } }",
        json!({}),
        Some(&alice.token),
    )
    .await;
    assert_no_errors(&body);

    let me = &body["data"]["me"];
    assert_eq!(me["_id"], json!(alice.id));
    assert_eq!(me["username"], json!(alice.username));
    assert_eq!(me["email"], json!(alice.email));
    assert_eq!(me["friendCount"], json!(0));
    assert_eq!(texts(&me["thoughts"]), vec!["mine"]);
    assert_eq!(me["friends"], json!([]));
    Ok(())
}

#[actix_web::test]
async fn test_user_by_username() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state().await?;
    let app = create_test_app(state).build().await?;
    let alice = sign_up(&app, "alice").await;

    let body = gql(
        &app,
        "query U($u: String!) { user(username: $u) { _id } }",
        json!({ "u": alice.username }),
        None,
    )
    .await;
    assert_no_errors(&body);
    assert_eq!(body["data"]["user"]["_id"], json!(alice.id));

    let none = gql(
        &app,
        r#"{ user(username: "nobody-here") { _id } }"#,
        json!({}),
        None,
    )
    .await;
    assert_no_errors(&none);
    assert!(none["data"]["user"].is_null());
    Ok(())
}
