// API client implementations for the upstream services
pub mod error;
pub mod http;
pub mod locationiq;
pub mod nps;
pub mod tmdb;
pub mod weatherbit;
pub mod yelp;

// Re-export common types
pub use error::{ApiError, Result};
pub use http::build_http_client;
pub use locationiq::{LocationIqClient, LocationIqPlace, LOCATIONIQ_API_BASE};
pub use nps::{NpsAddress, NpsClient, NpsEntranceFee, NpsPark, NPS_API_BASE};
pub use tmdb::{TmdbClient, TmdbMovie, TMDB_API_BASE};
pub use weatherbit::{WeatherbitClient, WeatherbitDay, WeatherbitDescription, WEATHERBIT_API_BASE};
pub use yelp::{YelpBusiness, YelpClient, YELP_API_BASE};
