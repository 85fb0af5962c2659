use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "WeatherApiClient/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Accept header value required by the NWS API
pub const GEO_JSON: &str = "application/geo+json";

/// Upper bound for a single upstream request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Name advertised to MCP clients
pub const SERVER_NAME: &str = "weather";
