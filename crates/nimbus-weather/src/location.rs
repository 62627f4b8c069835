//! IP-based geolocation.
//!
//! Single-shot lookup against ipapi.co with a hard 5 second timeout and
//! no caching. There is no retry; a failed acquisition leaves the widget
//! showing its error message until the next launch.

use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

use crate::types::{Coordinates, GeoError};

const IPAPI_URL: &str = "https://ipapi.co/json/";
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct LocationProvider {
    client: reqwest::Client,
    base_url: String,
}

impl LocationProvider {
    pub fn new() -> Result<Self, GeoError> {
        Self::with_base_url(IPAPI_URL)
    }

    /// Create a provider against a specific geolocation endpoint (used by
    /// tests to point at a mock server).
    pub fn with_base_url(base_url: &str) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder()
            .timeout(ACQUIRE_TIMEOUT)
            .build()
            .map_err(|e| GeoError::Other(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Resolve the machine's position from its public IP address.
    #[instrument(skip(self), level = "info")]
    pub async fn acquire(&self) -> Result<Coordinates, GeoError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeoError::Timeout
                } else {
                    tracing::debug!("geolocation request failed: {}", e);
                    GeoError::ServiceUnavailable
                }
            })?;

        let status = response.status();
        if status.as_u16() == 403 || status.as_u16() == 429 {
            return Err(GeoError::PermissionDenied);
        }
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "geolocation service error");
            return Err(GeoError::ServiceUnavailable);
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| GeoError::Other(format!("geolocation parse error: {}", e)))?;

        match (body.latitude, body.longitude) {
            (Some(latitude), Some(longitude)) => {
                tracing::info!(latitude, longitude, "location acquired");
                Ok(Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => Err(GeoError::Other(
                "geolocation response had no coordinates".into(),
            )),
        }
    }
}
