//! Weather data for Nimbus
//!
//! Fetches current and hourly conditions from the Tomorrow.io timelines
//! API and resolves the machine's position via IP geolocation.

pub mod codes;
pub mod daytime;
pub mod format;
pub mod location;
pub mod provider;
pub mod types;

pub use location::LocationProvider;
pub use provider::WeatherProvider;
pub use types::*;
