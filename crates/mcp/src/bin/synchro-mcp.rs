// Synchro Bus MCP server binary (stdio transport)

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use synchro_mcp::config::McpConfig;
use synchro_mcp::server::McpServer;
use synchro_mcp::tools::{register_transit_tools, ToolRegistry};

#[derive(Parser, Debug)]
#[command(name = "synchro-mcp")]
#[command(about = "MCP server for the Synchro Bus transit network", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, env = "SYNCHRO_MCP_CONFIG", default_value = "synchro-mcp.toml")]
    config: PathBuf,

    /// Transit API base URL
    #[arg(long, env = "SYNCHRO_BASE_URL")]
    base_url: Option<String>,

    /// Transit network identifier
    #[arg(long, env = "SYNCHRO_NETWORK_ID")]
    network_id: Option<u32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = McpConfig::load(&args.config)?;
    config.apply_overrides(args.base_url, args.network_id);

    tracing::info!(
        base_url = %config.upstream.base_url,
        network_id = config.upstream.network_id,
        "Synchro Bus MCP Server starting..."
    );

    let client = config.build_client()?;

    let mut registry = ToolRegistry::new();
    register_transit_tools(&mut registry, &client);

    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry, config.server_info());
    server.start().await?;

    Ok(())
}
