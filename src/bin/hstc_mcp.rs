//! HSTC MCP (Model Context Protocol) Server
//!
//! A stdio-based MCP server that exposes the EN/SEN note lookup
//! operations as tools for MCP clients.

use hstc::core::config::Config;
use hstc::core::services::Services;
use hstc::core::xdg::XdgDirs;
use hstc::mcp::McpServer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // stdout carries the protocol
        .with_ansi(false);

    match std::env::var("HSTC_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.compact().init(),
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg).unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {e}");
        std::process::exit(1);
    });
    config.log_config();

    // No partial snapshot: refuse to serve without notes
    let services = match Services::load(config) {
        Ok(services) => Arc::new(services),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Failed to load note data: {e}");
            std::process::exit(1);
        }
    };

    let mut server = McpServer::new(services);

    if let Err(e) = server.run().await {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
