// src/cli/serve.rs
// MCP server startup for the stdio and Streamable HTTP transports

use anyhow::Result;
use gestures::config::HttpSettings;
use gestures::mcp::GestureServer;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve one MCP session over stdin/stdout until the client disconnects
pub async fn run_mcp_server() -> Result<()> {
    let server = GestureServer::new();
    info!(tools = server.list_tool_names().len(), "Starting MCP server on stdio");

    let service = rmcp::serve_server(server, rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    info!("MCP client disconnected");
    Ok(())
}

/// Serve MCP over Streamable HTTP until Ctrl-C
pub async fn run_http_server(settings: HttpSettings) -> Result<()> {
    let ct = CancellationToken::new();

    let service = StreamableHttpService::new(
        || Ok(GestureServer::new()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig {
            sse_keep_alive: Some(Duration::from_secs(15)),
            stateful_mode: settings.stateful,
            cancellation_token: ct.child_token(),
            ..Default::default()
        },
    );

    let router = axum::Router::new().nest_service(&settings.path, service);
    let listener = tokio::net::TcpListener::bind(settings.addr()).await?;

    info!(
        addr = %listener.local_addr()?,
        path = %settings.path,
        stateful = settings.stateful,
        "Starting MCP server on Streamable HTTP"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
            ct.cancel();
        })
        .await?;

    Ok(())
}
