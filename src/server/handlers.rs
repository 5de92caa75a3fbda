//! MCP tool handlers for the contacts server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::error::SearchError;
use crate::services::{ContactSearchRequest, ContactSearchService};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// The MCP server that exposes local contact search.
#[derive(Clone)]
pub struct ContactsMcpServer {
    search_service: Arc<dyn ContactSearchService>,
    shutdown: CancellationToken,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for ContactsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contacts-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for local AddressBook contacts - searches every contact database on this machine by name and returns phone numbers and email addresses, paginated across all sources.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SearchContactsParams {
    /// First name to match. Without a last name it matches any part of the
    /// first name, last name, organization or nickname. Empty lists everyone.
    #[serde(default, alias = "firstName")]
    first_name: String,
    /// Last name to match together with the first name.
    #[serde(default, alias = "lastName")]
    last_name: Option<String>,
    /// Page size (default 50).
    #[serde(default)]
    limit: Option<usize>,
    /// Number of results to skip across all sources (default 0).
    #[serde(default)]
    offset: Option<usize>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn search_error_to_mcp(e: SearchError) -> McpError {
    match e {
        SearchError::InvalidParameters(_) => McpError {
            code: ErrorCode::INVALID_PARAMS,
            message: Cow::from(e.to_string()),
            data: None,
        },
        other => to_mcp_error(other),
    }
}

// Tool router implementation
#[tool_router]
impl ContactsMcpServer {
    /// Create a new contacts MCP server.
    pub fn new(search_service: Arc<dyn ContactSearchService>) -> Self {
        Self {
            search_service,
            shutdown: CancellationToken::new(),
            tool_router: Self::tool_router(),
        }
    }

    /// Token cancelled when the server stops; every search runs under a child of it.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Search local contacts by name.
    #[tool(
        description = "Search contacts in every local AddressBook database by partial first and/or last name. Returns name + phone/email handle pairs (phones normalized to E.164 where possible) with pagination across all sources."
    )]
    async fn search_contacts(
        &self,
        params: Parameters<SearchContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: search_contacts called");
        tracing::debug!(
            "Parameters: first_name={}, last_name={:?}, limit={:?}, offset={:?}",
            params.first_name,
            params.last_name,
            params.limit,
            params.offset
        );

        let request = ContactSearchRequest {
            first_name: params.first_name,
            last_name: params.last_name,
            limit: params.limit,
            offset: params.offset,
        };

        let response = self
            .search_service
            .search(request, self.shutdown.child_token())
            .await
            .map_err(|e| {
                tracing::error!("Contact search failed: {:?}", e);
                search_error_to_mcp(e)
            })?;

        let json_response = serde_json::to_string_pretty(&response).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
