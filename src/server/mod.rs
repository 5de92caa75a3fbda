//! MCP server implementation for contact search.
//!
//! This module provides the MCP protocol server that exposes local contact
//! search to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactsMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contacts MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects. In-flight searches are cancelled on the way out.
pub async fn run_server(server: ContactsMcpServer) -> Result<()> {
    let shutdown = server.shutdown_token();

    let service = server.serve(stdio()).await?;
    let quit_reason = service.waiting().await;

    shutdown.cancel();
    quit_reason?;

    Ok(())
}
