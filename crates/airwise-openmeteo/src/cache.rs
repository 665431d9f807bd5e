use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use airwise_core::models::location::Location;
use airwise_core::models::reading::EnvironmentalReading;

use crate::ReadingSource;
use crate::error::FetchError;

pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Coordinates rounded to 4 decimal places (about 11 m), so repeated
/// lookups of the same place share an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    lat_e4: i64,
    lon_e4: i64,
}

impl From<Location> for Fingerprint {
    fn from(location: Location) -> Self {
        Self {
            lat_e4: (location.latitude * 10_000.0).round() as i64,
            lon_e4: (location.longitude * 10_000.0).round() as i64,
        }
    }
}

struct CacheEntry {
    fetched_at: Instant,
    reading: EnvironmentalReading,
}

/// Wraps a source and reuses its readings for `ttl`. Failed fetches are
/// not cached.
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    entries: Mutex<HashMap<Fingerprint, CacheEntry>>,
}

impl<S: ReadingSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ReadingSource> ReadingSource for CachedSource<S> {
    fn current(&self, location: Location) -> Result<EnvironmentalReading, FetchError> {
        let key = Fingerprint::from(location);

        {
            let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            if let Some(entry) = entries.get(&key) {
                if entry.fetched_at.elapsed() < self.ttl {
                    tracing::debug!(%location, "reading served from cache");
                    return Ok(entry.reading.clone());
                }
            }
        }

        let reading = self.inner.current(location)?;

        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.retain(|_, entry| entry.fetched_at.elapsed() < self.ttl);
        entries.insert(
            key,
            CacheEntry {
                fetched_at: Instant::now(),
                reading: reading.clone(),
            },
        );
        Ok(reading)
    }
}
