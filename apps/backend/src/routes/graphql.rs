use actix_web::{web, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::auth::RequestContext;
use crate::graphql::AppSchema;

/// Execute one GraphQL request with this request's authentication context.
async fn graphql_handler(
    schema: web::Data<AppSchema>,
    ctx: RequestContext,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(ctx)).await.into()
}

async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/graphql")
            .route(web::post().to(graphql_handler))
            .route(web::get().to(graphiql)),
    );
}
