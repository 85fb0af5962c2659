use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    ErrorData as McpError, RoleServer,
};
use std::sync::Arc;

use crate::client::WeatherClient;
use crate::config::WeatherConfig;
use crate::constants::SERVER_NAME;
use crate::dispatch::Invocation;
use crate::error::ToolError;
use crate::registry::ToolRegistry;
use crate::tools::weather_tools;

/// MCP server exposing the weather tools
#[derive(Clone)]
pub struct Weather {
    registry: Arc<ToolRegistry>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: &WeatherConfig) -> Result<Self, ToolError> {
        let client = WeatherClient::new(config)?;
        let registry = weather_tools(Arc::new(client))?;

        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    pub fn tools(&self) -> Vec<Tool> {
        self.registry
            .list_tools()
            .iter()
            .map(|definition| definition.to_tool())
            .collect()
    }

    /// Runs a `tools/call` request and wraps each text block as content
    pub async fn call(&self, request: CallToolRequestParam) -> Result<CallToolResult, McpError> {
        let invocation = Invocation::from(request);
        let tool_name = invocation.tool_name.clone();

        let blocks = self.registry.dispatch(invocation).await.map_err(|e| {
            tracing::error!("Tool {} failed: {}", tool_name, e);
            McpError::from(e)
        })?;

        Ok(CallToolResult::success(
            blocks.into_iter().map(Content::text).collect(),
        ))
    }
}

impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_tool_list_changed()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API. \
                Provides weather alerts and forecasts for US locations."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(name: &str, arguments: Value) -> CallToolRequestParam {
        CallToolRequestParam {
            name: name.to_string().into(),
            arguments: arguments.as_object().cloned(),
        }
    }

    fn texts(result: &CallToolResult) -> Vec<String> {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    #[test]
    fn test_server_info() {
        let weather = Weather::new(&WeatherConfig::default()).unwrap();
        let info = weather.get_info();

        assert_eq!(info.server_info.name, "weather");
        let tools = info.capabilities.tools.unwrap();
        assert_eq!(tools.list_changed, Some(true));
    }

    #[test]
    fn test_tools_advertise_schemas() {
        let weather = Weather::new(&WeatherConfig::default()).unwrap();
        let tools = weather.tools();

        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "get_alerts");
        assert_eq!(
            tools[0].input_schema.get("required"),
            Some(&json!(["state"]))
        );
        assert_eq!(tools[1].name, "get_forecast");
        assert_eq!(
            tools[1].input_schema["properties"]["latitude"]["type"],
            json!("number")
        );
    }

    #[tokio::test]
    async fn test_missing_state_is_successful_text() {
        let weather = Weather::new(&WeatherConfig::default()).unwrap();

        let result = weather.call(request("get_alerts", json!({}))).await.unwrap();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(texts(&result), vec!["The 'state' parameter is required."]);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_protocol_error() {
        let weather = Weather::new(&WeatherConfig::default()).unwrap();

        let err = weather
            .call(request("get_tides", json!({})))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_forecast_blocks_become_content() {
        let server = MockServer::start().await;
        let forecast_url = format!("{}/gridpoints/MTR/85,105/forecast", server.uri());

        Mock::given(method("GET"))
            .and(path("/points/37.7,-122.4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "properties": { "forecast": forecast_url }
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gridpoints/MTR/85,105/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "properties": { "periods": [
                    { "name": "Today", "temperature": 64, "temperatureUnit": "F" },
                    { "name": "Tonight", "temperature": 51, "temperatureUnit": "F" }
                ]}
            })))
            .mount(&server)
            .await;

        let weather = Weather::new(&WeatherConfig::with_base_url(server.uri())).unwrap();
        let result = weather
            .call(request(
                "get_forecast",
                json!({ "latitude": 37.7, "longitude": -122.4 }),
            ))
            .await
            .unwrap();

        let blocks = texts(&result);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Today:"));
        assert!(blocks[1].starts_with("Tonight:"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/points/37.7,-122.4"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let weather = Weather::new(&WeatherConfig::with_base_url(server.uri())).unwrap();
        let err = weather
            .call(request(
                "get_forecast",
                json!({ "latitude": 37.7, "longitude": -122.4 }),
            ))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
