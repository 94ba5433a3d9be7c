// SQLite-backed geocode cache
// One row per search string, written once and trusted forever after

pub mod cache;

pub use cache::{CacheError, CacheManager, CachedLocation, Result};
