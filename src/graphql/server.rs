use std::future::Future;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, post_service},
};
use tokio::net::TcpListener;

use super::RosterSchema;
use crate::error::Result;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// HTTP routes: POST executes operations, GET serves GraphiQL when enabled.
pub fn router(schema: RosterSchema, graphiql_enabled: bool) -> Router {
    let endpoint = if graphiql_enabled {
        get(graphiql).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };
    Router::new().route(GRAPHQL_PATH, endpoint)
}

/// Serve the schema on an already bound listener until `shutdown` resolves.
pub async fn run_server<F>(
    listener: TcpListener,
    schema: RosterSchema,
    graphiql_enabled: bool,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("GraphQL server listening on http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, router(schema, graphiql_enabled))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}
