//! MCP Server entry point for DNSimple
//!
//! Serves the DNSimple tools over stdio. The API token is resolved lazily on
//! the first tool call: `DNSIMPLE_API_TOKEN`, then 1Password, then the local
//! token cache.

mod adapters;
mod config;
mod schemas;
mod server;

use std::process::ExitCode;
use std::sync::Arc;

use adapters::{FileTokenCache, OnePasswordCli};
use config::McpConfig;
use dnsimple_core::services::{CredentialResolver, ServiceContext};
use dnsimple_core::DnsimpleConnector;
use rmcp::ServiceExt;
use server::DnsimpleMcp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting DNSimple MCP Server");

    let config = match McpConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Configuration: {config:?}");

    if config.api_base != dnsimple_provider::DNSIMPLE_API_BASE {
        tracing::info!("Using DNSimple API at {}", config.api_base);
    }

    // Create adapters
    let token_cache = FileTokenCache::new(&config.config_dir);
    tracing::info!("Token cache: {}", token_cache.path().display());
    let credentials = CredentialResolver::new(config.env_token.clone())
        .with_secret_source(Arc::new(OnePasswordCli::new(config.op_binary.clone())))
        .with_cache(Arc::new(token_cache));
    let connector = Arc::new(DnsimpleConnector::new(config.api_base.clone()));

    // Create service context; token and account are resolved on first use
    let ctx = Arc::new(ServiceContext::new(credentials, connector));

    let mcp_server = DnsimpleMcp::new(ctx);
    tracing::info!("MCP server initialized with 10 tools");

    // Start serving via stdio
    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Wait for the server to complete
    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
