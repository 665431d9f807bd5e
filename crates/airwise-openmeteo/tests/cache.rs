use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use airwise_core::models::location::Location;
use airwise_core::models::reading::EnvironmentalReading;
use airwise_openmeteo::ReadingSource;
use airwise_openmeteo::cache::{CachedSource, Fingerprint};
use airwise_openmeteo::error::FetchError;

/// Returns the latitude as the temperature and counts calls.
#[derive(Default)]
struct CountingSource {
    calls: AtomicUsize,
    fail: bool,
}

impl ReadingSource for CountingSource {
    fn current(&self, location: Location) -> Result<EnvironmentalReading, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(FetchError::Status {
                url: "http://stub".to_string(),
                status: 503,
            });
        }
        Ok(EnvironmentalReading {
            temperature_c: Some(location.latitude),
            ..Default::default()
        })
    }
}

fn calls(source: &CachedSource<CountingSource>) -> usize {
    source.inner().calls.load(Ordering::SeqCst)
}

#[test]
fn repeated_location_is_fetched_once() {
    let source = CachedSource::new(CountingSource::default(), Duration::from_secs(600));

    let first = source.current(Location::LONDON).unwrap();
    let second = source.current(Location::LONDON).unwrap();
    assert_eq!(first, second);
    assert_eq!(calls(&source), 1);
}

#[test]
fn distinct_locations_are_cached_separately() {
    let source = CachedSource::new(CountingSource::default(), Duration::from_secs(600));
    let paris = Location::new(48.8566, 2.3522).unwrap();

    source.current(Location::LONDON).unwrap();
    let reading = source.current(paris).unwrap();
    assert_eq!(reading.temperature_c, Some(48.8566));
    assert_eq!(calls(&source), 2);
}

#[test]
fn nearby_coordinates_share_a_fingerprint() {
    let a = Location::new(51.50741, -0.12781).unwrap();
    let b = Location::new(51.50739, -0.12779).unwrap();
    assert_eq!(Fingerprint::from(a), Fingerprint::from(b));
    assert_ne!(
        Fingerprint::from(a),
        Fingerprint::from(Location::new(51.5084, -0.1278).unwrap())
    );
}

#[test]
fn expired_entries_are_refetched() {
    let source = CachedSource::new(CountingSource::default(), Duration::ZERO);
    source.current(Location::LONDON).unwrap();
    source.current(Location::LONDON).unwrap();
    assert_eq!(calls(&source), 2);
}

#[test]
fn failures_are_not_cached() {
    let source = CachedSource::new(
        CountingSource {
            fail: true,
            ..Default::default()
        },
        Duration::from_secs(600),
    );
    assert!(source.current(Location::LONDON).is_err());
    assert!(source.current(Location::LONDON).is_err());
    assert_eq!(calls(&source), 2);
}
