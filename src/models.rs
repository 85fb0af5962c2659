use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// National Weather Service API Models
// ============================================================================
//
// Only the fields we render are modelled; everything else in the GeoJSON
// payloads is ignored.

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    #[serde(default)]
    pub properties: AlertProperties,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
    pub severity: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    /// Absolute URL of the gridpoint forecast for this coordinate
    pub forecast: String,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: f64,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<String>,
    #[serde(rename = "windDirection")]
    pub wind_direction: Option<String>,
    #[serde(rename = "shortForecast")]
    pub short_forecast: Option<String>,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state code (e.g. CA, NY)
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}
