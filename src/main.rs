mod client;
mod config;
mod constants;
mod dispatch;
mod error;
mod formatters;
mod models;
mod registry;
mod service;
mod tools;

use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::WeatherConfig;
use crate::service::Weather;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol stream, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_mcp_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP weather server");

    let weather = Weather::new(&WeatherConfig::default())?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
