// Geocode lookup with caching support
use std::sync::Arc;

use cityscout_cache::{CacheManager, CachedLocation};
use tracing::{debug, info};

use crate::{models::GeocodeRecord, providers::Provider, Result};

/// Geocoding that checks the store before hitting the upstream
///
/// HIT answers straight from the `location` table. MISS asks the provider,
/// writes the answer, and responds with the row that ended up stored.
/// Nothing is ever refreshed or evicted.
pub struct CachedLocationLookup {
    cache: Arc<CacheManager>,
    geocoder: Arc<dyn Provider<GeocodeRecord>>,
}

impl CachedLocationLookup {
    pub fn new(cache: Arc<CacheManager>, geocoder: Arc<dyn Provider<GeocodeRecord>>) -> Self {
        Self { cache, geocoder }
    }

    pub async fn lookup(&self, term: &str) -> Result<GeocodeRecord> {
        debug!("Checking cache for location: {}", term);
        let cache = Arc::clone(&self.cache);
        let key = term.to_string();
        let hit = tokio::task::spawn_blocking(move || cache.get_location(&key)).await??;

        if let Some(hit) = hit {
            info!("Cache hit for '{}'", term);
            return Ok(hit.into());
        }

        debug!("Cache miss for '{}', asking the geocoder", term);
        let fresh = self.geocoder.fetch(term).await?;

        let row = CachedLocation::new(
            term.to_string(),
            fresh.formatted_query,
            fresh.latitude,
            fresh.longitude,
        );
        let cache = Arc::clone(&self.cache);
        let stored = tokio::task::spawn_blocking(move || cache.insert_location(&row)).await??;
        info!("Cached location for '{}'", term);

        Ok(stored.into())
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }
}
