use async_trait::async_trait;
use std::sync::Arc;

use crate::client::WeatherClient;
use crate::dispatch::Arguments;
use crate::error::ToolError;
use crate::models::{GetAlertsRequest, GetForecastRequest};
use crate::registry::{ToolDefinition, ToolHandler, ToolRegistry};

/// Active alerts for a US state
pub struct AlertsTool {
    client: Arc<WeatherClient>,
}

impl AlertsTool {
    pub fn definition() -> ToolDefinition {
        ToolDefinition::for_input::<GetAlertsRequest>(
            "get_alerts",
            "Get weather alerts for a US state. Input is Two-letter US state code (e.g. CA, NY)",
        )
    }
}

#[async_trait]
impl ToolHandler for AlertsTool {
    async fn call(&self, arguments: Arguments) -> Result<Vec<String>, ToolError> {
        let request: GetAlertsRequest = arguments.parse()?;
        tracing::info!("Getting alerts for state: {}", request.state);

        Ok(self.client.get_alerts(&request.state).await?)
    }
}

/// Forecast for a latitude/longitude pair
pub struct ForecastTool {
    client: Arc<WeatherClient>,
}

impl ForecastTool {
    pub fn definition() -> ToolDefinition {
        ToolDefinition::for_input::<GetForecastRequest>(
            "get_forecast",
            "Get weather forecast for a specific latitude/longitude",
        )
    }
}

#[async_trait]
impl ToolHandler for ForecastTool {
    async fn call(&self, arguments: Arguments) -> Result<Vec<String>, ToolError> {
        let request: GetForecastRequest = arguments.parse()?;
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        Ok(self
            .client
            .get_forecast(request.latitude, request.longitude)
            .await?)
    }
}

/// Registry holding `get_alerts` and `get_forecast`, both backed by `client`
pub fn weather_tools(client: Arc<WeatherClient>) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register(
        AlertsTool::definition(),
        Arc::new(AlertsTool {
            client: client.clone(),
        }),
    )?;
    registry.register(ForecastTool::definition(), Arc::new(ForecastTool { client }))?;
    Ok(registry)
}
