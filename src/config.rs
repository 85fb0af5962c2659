use std::time::Duration;

use crate::constants::{NWS_API_BASE, REQUEST_TIMEOUT, USER_AGENT};

/// Settings for the upstream weather API client
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl WeatherConfig {
    /// Same defaults, different upstream. Used to point the client at a mock server.
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}
