// Provider implementations - one per upstream, each bridging an API client to a domain record
pub mod locationiq;
pub mod nps;
pub mod tmdb;
pub mod weatherbit;
pub mod yelp;

pub use locationiq::LocationIqProvider;
pub use nps::NpsProvider;
pub use tmdb::TmdbProvider;
pub use weatherbit::WeatherbitProvider;
pub use yelp::YelpProvider;

use crate::Result;

/// One outbound lookup: a search term in, a normalized record out
///
/// Every upstream gets one implementation. Handlers only ever see this
/// trait, which is what lets tests swap in a mock.
#[async_trait::async_trait]
pub trait Provider<T: Send + 'static>: Send + Sync {
    async fn fetch(&self, term: &str) -> Result<T>;
}
