//! Error types for the weather server.

use reqwest::StatusCode;
use rmcp::ErrorData as McpError;

/// Failure talking to the upstream weather API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Network failure, timeout, or the client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Request to {url} failed with status: {status}")]
    Status { status: StatusCode, url: String },

    /// Body was not the JSON shape we expect.
    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while registering or dispatching tools.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Required argument absent or not coercible. Reported to the caller as tool text.
    #[error("{0}")]
    MissingParameter(String),

    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::UnknownTool(_) | ToolError::MissingParameter(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            ToolError::DuplicateTool(_) | ToolError::InvalidArguments(_) => {
                McpError::internal_error(err.to_string(), None)
            }
            ToolError::Upstream(e) => {
                McpError::internal_error(format!("Weather API request failed: {}", e), None)
            }
        }
    }
}
