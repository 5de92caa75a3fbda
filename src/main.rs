//! Contacts MCP Server - Main entry point
//!
//! This is the main executable for the Contacts MCP Server, which provides a Model
//! Context Protocol (MCP) interface to the local AddressBook databases.

use anyhow::Result;
use contacts_mcp_server::services::ContactSearchService;
use contacts_mcp_server::sources::SourceProvider;
use contacts_mcp_server::{
    Config, ContactSearchServiceImpl, ContactsMcpServer, DirectorySourceProvider,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting Contacts MCP Server with sources directory: {}",
        config.sources_dir.display()
    );

    // Sources are discovered on first search and reused afterwards
    let provider = Arc::new(DirectorySourceProvider::new(
        config.sources_dir.clone(),
        config.db_file_name.clone(),
    )) as Arc<dyn SourceProvider>;

    let search_service = Arc::new(
        ContactSearchServiceImpl::new(provider, config.strategy)
            .with_limits(config.default_limit, config.max_limit),
    ) as Arc<dyn ContactSearchService>;

    let server = ContactsMcpServer::new(search_service);

    info!("Contacts MCP Server initialized");
    info!(
        "Search strategy: {:?}, default limit: {}, max limit: {}",
        config.strategy, config.default_limit, config.max_limit
    );

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    contacts_mcp_server::server::run_server(server).await?;

    info!("Contacts MCP Server shutdown complete");
    Ok(())
}
