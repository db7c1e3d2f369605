//! # Forecast Cache
//!
//! Bounded, expiring cache in front of a [`ForecastProvider`], with fuzzy
//! lookup: a cached forecast answers any request whose coordinate is within
//! [`MAX_DISTANCE_MILES`] of a cached key and whose time is within
//! [`MAX_TIME_DRIFT_SECS`] of it. Hourly forecasts vary little across a few
//! miles and minutes, so nearby requests share one upstream call.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use super::errors::WeatherResult;
use super::types::{ForecastPeriod, WeatherRequest};
use super::ForecastProvider;

/// A cached entry answers requests within this many statute miles of its key.
pub const MAX_DISTANCE_MILES: f64 = 3.0;

/// A cached entry answers requests within this many seconds of its key,
/// either direction.
pub const MAX_TIME_DRIFT_SECS: i64 = 3600;

/// Cache activity counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from a cached entry
    pub hits: u64,
    /// Requests that found no close-enough entry
    pub misses: u64,
    /// Successful provider loads
    pub loads: u64,
    /// Failed provider loads (failures are never cached)
    pub load_failures: u64,
}

#[derive(Debug)]
struct CacheEntry {
    key: WeatherRequest,
    period: ForecastPeriod,
    inserted_at: Instant,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: VecDeque<CacheEntry>,
    stats: CacheStats,
}

/// Caching wrapper around a forecast provider.
#[derive(Debug)]
pub struct ForecastCache<P> {
    provider: P,
    capacity: usize,
    ttl: Duration,
    inner: Mutex<CacheInner>,
}

impl<P: ForecastProvider> ForecastCache<P> {
    /// Wrap `provider` with a cache of at most `capacity` entries, each
    /// expiring `ttl` after it was written.
    pub fn new(provider: P, capacity: usize, ttl: Duration) -> Self {
        Self {
            provider,
            capacity,
            ttl,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Answer `request` from the cache when a close-enough entry exists,
    /// loading from the provider otherwise.
    ///
    /// The lock is not held across the provider call, so two overlapping
    /// misses may both load; the later insert simply lands as a second entry.
    pub async fn forecast(&self, request: &WeatherRequest) -> WeatherResult<ForecastPeriod> {
        if let Some(period) = self.lookup(request) {
            return Ok(period);
        }
        let loaded = self.provider.forecast(request).await;
        self.record(request, &loaded);
        loaded
    }

    /// A copy of the current counters.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats
    }

    fn lookup(&self, request: &WeatherRequest) -> Option<ForecastPeriod> {
        let mut inner = self.lock();
        let ttl = self.ttl;
        inner.entries.retain(|entry| entry.inserted_at.elapsed() < ttl);

        let hit = inner
            .entries
            .iter()
            .find(|entry| is_close(&entry.key, request))
            .map(|entry| entry.period.clone());
        match hit {
            Some(_) => inner.stats.hits += 1,
            None => inner.stats.misses += 1,
        }
        hit
    }

    fn record(&self, request: &WeatherRequest, loaded: &WeatherResult<ForecastPeriod>) {
        let mut inner = self.lock();
        match loaded {
            Ok(period) => {
                inner.stats.loads += 1;
                if self.capacity == 0 {
                    return;
                }
                while inner.entries.len() >= self.capacity {
                    inner.entries.pop_front();
                }
                inner.entries.push_back(CacheEntry {
                    key: request.clone(),
                    period: period.clone(),
                    inserted_at: Instant::now(),
                });
            }
            Err(_) => inner.stats.load_failures += 1,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Whether a cached key is close enough, in space and time, to answer a
/// request.
fn is_close(key: &WeatherRequest, request: &WeatherRequest) -> bool {
    let drift = request
        .datetime
        .signed_duration_since(key.datetime)
        .num_seconds();
    distance_miles(key.lat, key.lon, request.lat, request.lon) <= MAX_DISTANCE_MILES
        && drift.abs() <= MAX_TIME_DRIFT_SECS
}

/// Great-circle distance in statute miles between two coordinates.
fn distance_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let theta = (lon1 - lon2).to_radians();
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let arc = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * theta.cos();
    // Identical points can land a hair above 1.0; acos would return NaN.
    let arc = arc.clamp(-1.0, 1.0);
    // Arc-minutes of a great circle, converted to statute miles.
    arc.acos().to_degrees() * 60.0 * 1.1515
}
