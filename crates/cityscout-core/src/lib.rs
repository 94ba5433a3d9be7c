// Domain side of the relay: records, providers, the cached geocode lookup
pub mod config;
pub mod error;
pub mod location_with_cache;
pub mod models;
pub mod providers;
pub mod relay;

pub use config::Config;
pub use error::Error;
pub use location_with_cache::CachedLocationLookup;
pub use models::{Business, GeocodeRecord, Movie, Park, WeatherDay};
pub use providers::Provider;
pub use relay::Relay;

/// Result type alias because typing Result<T, Error> everywhere is tedious
pub type Result<T> = std::result::Result<T, Error>;
