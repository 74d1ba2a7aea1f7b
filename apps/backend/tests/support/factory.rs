//! Seed data through the public GraphQL surface.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error;
use backend_test_support::graphql::assert_no_errors;
use backend_test_support::unique_helpers::{unique_email, unique_username};
use serde_json::json;

use super::graphql::gql;

pub const SIGNUP: &str = r#"
    mutation Signup($username: String!, $email: String!, $password: String!) {
        addUser(username: $username, email: $email, password: $password) {
            token
            user { _id username email }
        }
    }
"#;

/// A signed-up user as seen by the tests.
#[derive(Debug, Clone)]
pub struct SignedUp {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Sign up a fresh user with unique username and email.
pub async fn sign_up<S, B>(app: &S, prefix: &str) -> SignedUp
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let username = unique_username(prefix);
    let email = unique_email(prefix);
    let password = "hunter22".to_string();

    let body = gql(
        app,
        SIGNUP,
        json!({ "username": username, "email": email, "password": password }),
        None,
    )
    .await;
    assert_no_errors(&body);

    let auth = &body["data"]["addUser"];
    SignedUp {
        id: auth["user"]["_id"].as_str().unwrap().to_string(),
        username: auth["user"]["username"].as_str().unwrap().to_string(),
        email: auth["user"]["email"].as_str().unwrap().to_string(),
        password,
        token: auth["token"].as_str().unwrap().to_string(),
    }
}
