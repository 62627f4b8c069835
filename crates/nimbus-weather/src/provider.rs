//! Tomorrow.io timelines client.
//!
//! One GET per fetch cycle, no retry. Failures come back as typed
//! [`FetchError`] values; nothing panics past this boundary.

use serde::Deserialize;
use tracing::instrument;

use crate::types::{CurrentObservation, FetchError, HourlyInterval, WeatherReport};

const TIMESTEP_CURRENT: &str = "current";
const TIMESTEP_HOURLY: &str = "1h";

/// Fields requested for both timesteps.
const FIELDS: &str = "temperature,weatherCode,humidity,windSpeed";

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherProvider {
    /// Create a provider against the given timelines endpoint.
    ///
    /// The endpoint and key come from configuration so tests can point
    /// the provider at a mock server.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Fetch current conditions and the hourly forecast in one request.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<WeatherReport, FetchError> {
        let location = format!("{},{}", latitude, longitude);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("location", location.as_str()),
                ("fields", FIELDS),
                ("timesteps", "current,1h"),
                ("units", "metric"),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Tomorrow.io returns meaningful errors in the body
            let text = response.text().await.unwrap_or_default();
            let body = match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(_) => serde_json::Value::String(text),
            };
            tracing::warn!(status = status.as_u16(), %body, "weather API error");
            return Err(FetchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: TimelinesResponse = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(format!("JSON decode error: {}", e)))?;

        let report = extract_report(payload)?;
        tracing::debug!(
            hourly_intervals = report.hourly.len(),
            "weather data fetched"
        );
        Ok(report)
    }
}

/// Pull the "current" and "1h" timelines out of a decoded response.
fn extract_report(payload: TimelinesResponse) -> Result<WeatherReport, FetchError> {
    let mut current_intervals = None;
    let mut hourly_intervals = None;

    for timeline in payload.data.timelines {
        match timeline.timestep.as_str() {
            TIMESTEP_CURRENT => current_intervals = Some(timeline.intervals),
            TIMESTEP_HOURLY => hourly_intervals = Some(timeline.intervals),
            _ => {}
        }
    }

    let current_intervals = current_intervals
        .ok_or_else(|| FetchError::MalformedResponse("missing \"current\" timeline".into()))?;
    let hourly_intervals = hourly_intervals
        .ok_or_else(|| FetchError::MalformedResponse("missing \"1h\" timeline".into()))?;

    let first = current_intervals
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::MalformedResponse("empty \"current\" timeline".into()))?;

    let current = CurrentObservation {
        temperature_c: first.values.temperature,
        humidity_pct: first.values.humidity,
        wind_speed_ms: first.values.wind_speed,
        weather_code: first.values.weather_code,
        timestamp: first.start_time,
    };

    let hourly = hourly_intervals
        .into_iter()
        .map(|interval| HourlyInterval {
            start_time: interval.start_time,
            temperature_c: interval.values.temperature,
            weather_code: interval.values.weather_code,
        })
        .collect();

    Ok(WeatherReport { current, hourly })
}

// Wire shape of the timelines response:
// { data: { timelines: [ { timestep, intervals: [ { startTime, values } ] } ] } }

#[derive(Debug, Deserialize)]
struct TimelinesResponse {
    data: TimelinesData,
}

#[derive(Debug, Deserialize)]
struct TimelinesData {
    timelines: Vec<Timeline>,
}

#[derive(Debug, Deserialize)]
struct Timeline {
    timestep: String,
    intervals: Vec<ApiInterval>,
}

#[derive(Debug, Deserialize)]
struct ApiInterval {
    #[serde(rename = "startTime")]
    start_time: chrono::DateTime<chrono::FixedOffset>,
    values: ApiValues,
}

#[derive(Debug, Deserialize)]
struct ApiValues {
    temperature: f64,
    #[serde(rename = "weatherCode")]
    weather_code: i64,
    #[serde(default)]
    humidity: f64,
    #[serde(rename = "windSpeed", default)]
    wind_speed: f64,
}
