//! # Shared Server State
//!
//! The table store and forecast cache shared across all route handlers,
//! injected once when the router is built.

use std::path::PathBuf;
use std::time::Duration;

use crate::store::TableStore;
use crate::weather::{ForecastCache, ForecastProvider, NwsClient};

/// Forecast cache capacity used by the server
pub const WEATHER_CACHE_SIZE: usize = 10;

/// Forecast cache entry lifetime used by the server
pub const WEATHER_CACHE_TTL: Duration = Duration::from_secs(60);

/// State shared by every route handler.
#[derive(Debug)]
pub struct AppState<P> {
    /// The single resident table
    pub store: TableStore,

    /// Directory `loadcsv` paths are resolved under
    pub data_dir: PathBuf,

    /// Cached forecast lookup
    pub weather: ForecastCache<P>,
}

impl AppState<NwsClient> {
    /// Production state: empty store, NWS-backed weather cache.
    pub fn new(data_dir: PathBuf) -> Self {
        Self::with_provider(data_dir, NwsClient::new())
    }
}

impl<P: ForecastProvider> AppState<P> {
    /// State with an injected forecast provider (tests use this to avoid
    /// the network).
    pub fn with_provider(data_dir: PathBuf, provider: P) -> Self {
        Self {
            store: TableStore::new(),
            data_dir,
            weather: ForecastCache::new(provider, WEATHER_CACHE_SIZE, WEATHER_CACHE_TTL),
        }
    }
}
