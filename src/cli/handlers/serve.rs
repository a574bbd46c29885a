use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tokio::net::TcpListener;

use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let graphiql = ctx.config.server.graphiql;

    tokio::runtime::Runtime::new()?.block_on(async {
        // The store lives for the whole server run and is closed after shutdown
        let store = ctx.open_store().await?;
        let schema = build_schema(Arc::new(store.clone()));

        let listener = TcpListener::bind((host.as_str(), port)).await?;
        let addr = listener.local_addr()?;
        println!(
            "{} GraphQL server on http://{}{}",
            "Starting".green(),
            addr,
            GRAPHQL_PATH
        );
        if graphiql {
            println!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);
        }

        run_server(listener, schema, graphiql, shutdown_signal()).await?;
        store.close().await?;
        Ok::<(), anyhow::Error>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
