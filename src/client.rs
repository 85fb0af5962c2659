use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::WeatherConfig;
use crate::constants::GEO_JSON;
use crate::error::UpstreamError;
use crate::formatters::{format_alerts, format_forecast};
use crate::models::{AlertResponse, ForecastResponse, PointsResponse};

/// Client for the National Weather Service API.
///
/// Every request is a single attempt bounded by the configured timeout. The
/// underlying `reqwest::Client` is read-only once built and safe to share.
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GEO_JSON));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, UpstreamError> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Active alerts for a two-letter state code, one text block per alert
    pub async fn get_alerts(&self, state: &str) -> Result<Vec<String>, UpstreamError> {
        let url = format!("{}/alerts/active/area/{}", self.base_url, state);
        let alerts = self.make_request::<AlertResponse>(&url).await?;

        tracing::debug!("Received {} alerts for {}", alerts.features.len(), state);
        Ok(format_alerts(state, alerts))
    }

    /// Forecast for a coordinate: resolves the gridpoint, then follows its forecast URL
    pub async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<String>, UpstreamError> {
        let points_url = format!("{}/points/{},{}", self.base_url, latitude, longitude);
        let points = self.make_request::<PointsResponse>(&points_url).await?;

        let forecast = self
            .make_request::<ForecastResponse>(&points.properties.forecast)
            .await?;

        Ok(format_forecast(forecast))
    }
}
