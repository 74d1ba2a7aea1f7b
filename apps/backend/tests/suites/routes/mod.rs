pub mod cors;
pub mod graphiql;
pub mod healthcheck;
