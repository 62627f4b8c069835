use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Coarse icon groupings for Tomorrow.io weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Snow,
    Sleet,
    Thunderstorm,
}

/// Geographic position from the geolocation service
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Display label used in place of a reverse-geocoded city name
    pub fn label(&self) -> String {
        format!(
            "Latitude: {:.2}, Longitude: {:.2}",
            self.latitude, self.longitude
        )
    }
}

/// Current conditions from the "current" timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentObservation {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_ms: f64,
    pub weather_code: i64,
    pub timestamp: DateTime<FixedOffset>,
}

/// One entry of the "1h" timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyInterval {
    pub start_time: DateTime<FixedOffset>,
    pub temperature_c: f64,
    pub weather_code: i64,
}

/// Complete result of one fetch cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentObservation,
    pub hourly: Vec<HourlyInterval>,
}

/// Geolocation errors
#[derive(Debug, thiserror::Error)]
pub enum GeoError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location request timed out")]
    Timeout,

    #[error("Location service unavailable")]
    ServiceUnavailable,

    #[error("Location error: {0}")]
    Other(String),
}

impl GeoError {
    /// Static message for the widget's error region.
    pub fn user_message(&self) -> &'static str {
        match self {
            GeoError::PermissionDenied => {
                "Geolocation failed. Please allow location access and restart to see the weather."
            }
            GeoError::Timeout => "Locating took too long. Please restart to try again.",
            GeoError::ServiceUnavailable => "Geolocation is not available right now.",
            GeoError::Other(_) => "Could not determine your location.",
        }
    }
}

/// Weather fetch errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Weather API error ({status})")]
    Api {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Static message for the widget's error region.
    ///
    /// Status codes and raw bodies stay in the logs; the user only sees
    /// something actionable.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) => {
                "Could not reach the weather service. Check your internet connection."
            }
            FetchError::Api { status, .. } if *status == 401 || *status == 403 => {
                "Weather API key was rejected. Check your configuration."
            }
            FetchError::Api { .. } => "Could not fetch weather data. Please try again later.",
            FetchError::MalformedResponse(_) => {
                "The weather service returned unexpected data. Please try again later."
            }
        }
    }
}
