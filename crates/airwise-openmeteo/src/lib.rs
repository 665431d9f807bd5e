//! airwise-openmeteo
//!
//! Fetches current weather, air quality and pollen from Open-Meteo and
//! normalizes the two responses into one [`EnvironmentalReading`]. Thin
//! wrapper around `ureq`; retries are left to the caller.

pub mod cache;
pub mod client;
pub mod error;
pub mod payload;

use airwise_core::models::location::Location;
use airwise_core::models::reading::EnvironmentalReading;

use error::FetchError;

/// Anything that can produce the current reading for a location.
pub trait ReadingSource: Send + Sync {
    fn current(&self, location: Location) -> Result<EnvironmentalReading, FetchError>;
}
