use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::{self, HeaderValue};
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use serde_json::{json, Value};

/// A GraphQL call as the tests issue it.
pub struct GqlCall<'a> {
    query: &'a str,
    variables: Value,
    authorization: Option<HeaderValue>,
}

impl<'a> GqlCall<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            query,
            variables: json!({}),
            authorization: None,
        }
    }

    pub fn variables(mut self, variables: Value) -> Self {
        self.variables = variables;
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.authorization(HeaderValue::from_str(&format!("Bearer {token}")).unwrap())
    }

    /// Send an arbitrary `Authorization` header value.
    pub fn authorization(mut self, value: HeaderValue) -> Self {
        self.authorization = Some(value);
        self
    }

    fn to_request(&self) -> Request {
        let mut req = test::TestRequest::post()
            .uri("/graphql")
            .set_json(json!({ "query": self.query, "variables": self.variables }));
        if let Some(value) = &self.authorization {
            req = req.insert_header((header::AUTHORIZATION, value.clone()));
        }
        req.to_request()
    }

    /// Execute and return the HTTP status, `x-trace-id` header and JSON body.
    pub async fn send<S, B>(self, app: &S) -> (StatusCode, Option<String>, Value)
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
        B: MessageBody,
    {
        let resp = test::call_service(app, self.to_request()).await;
        let status = resp.status();
        let trace_id = resp
            .headers()
            .get("x-trace-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body: Value = test::read_body_json(resp).await;
        (status, trace_id, body)
    }
}

/// Send `query` and return only the JSON body.
pub async fn gql<S, B>(app: &S, query: &str, variables: Value, token: Option<&str>) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let mut call = GqlCall::new(query).variables(variables);
    if let Some(token) = token {
        call = call.bearer(token);
    }
    let (status, _, body) = call.send(app).await;
    assert_eq!(status, StatusCode::OK, "GraphQL responds 200 even with errors");
    body
}
