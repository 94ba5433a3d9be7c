// Wires the five providers and the geocode cache together from a Config
use std::sync::Arc;
use std::time::Duration;

use cityscout_api::{
    build_http_client, LocationIqClient, NpsClient, TmdbClient, WeatherbitClient, YelpClient,
};
use cityscout_cache::CacheManager;
use tracing::info;

use crate::{
    models::{Business, GeocodeRecord, Movie, Park, WeatherDay},
    providers::{
        LocationIqProvider, NpsProvider, Provider, TmdbProvider, WeatherbitProvider, YelpProvider,
    },
    CachedLocationLookup, Config, Result,
};

/// Everything a request handler can reach
///
/// Built once at startup. The cache connection and the HTTP client inside
/// are shared by every request; nothing here is request-scoped.
pub struct Relay {
    pub location: CachedLocationLookup,
    pub weather: Arc<dyn Provider<Vec<WeatherDay>>>,
    pub parks: Arc<dyn Provider<Vec<Park>>>,
    pub movies: Arc<dyn Provider<Vec<Movie>>>,
    pub businesses: Arc<dyn Provider<Vec<Business>>>,
}

impl Relay {
    /// Open the cache named in `config` and point every provider at its upstream
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = CacheManager::new(&config.database.path)?;
        info!(
            "Geocode cache at {} ({} cached locations)",
            config.database.path,
            cache.count()?
        );

        Self::with_cache(config, Arc::new(cache))
    }

    /// Like [`Relay::from_config`] but with an already-open cache
    pub fn with_cache(config: &Config, cache: Arc<CacheManager>) -> Result<Self> {
        let http = build_http_client(config.http.timeout_secs.map(Duration::from_secs))?;
        let keys = &config.keys;
        let endpoints = &config.endpoints;

        let geocoder: Arc<dyn Provider<GeocodeRecord>> =
            Arc::new(LocationIqProvider::new(LocationIqClient::with_client(
                http.clone(),
                keys.geocode.clone(),
                endpoints.locationiq.clone(),
            )));

        Ok(Self {
            location: CachedLocationLookup::new(cache, geocoder),
            weather: Arc::new(WeatherbitProvider::new(WeatherbitClient::with_client(
                http.clone(),
                keys.weather.clone(),
                endpoints.weatherbit.clone(),
            ))),
            parks: Arc::new(NpsProvider::new(NpsClient::with_client(
                http.clone(),
                keys.parks.clone(),
                endpoints.nps.clone(),
            ))),
            movies: Arc::new(TmdbProvider::new(TmdbClient::with_client(
                http.clone(),
                keys.movies.clone(),
                endpoints.tmdb.clone(),
            ))),
            businesses: Arc::new(YelpProvider::new(YelpClient::with_client(
                http,
                keys.yelp.clone(),
                endpoints.yelp.clone(),
            ))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> Config {
        let mut config = Config::default();
        config.keys.geocode = "geo".into();
        config.keys.weather = "wx".into();
        config.endpoints.locationiq = server.uri();
        config.endpoints.weatherbit = server.uri();
        config
    }

    #[tokio::test]
    async fn test_relay_routes_keys_to_their_upstreams() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("key", "geo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "display_name": "Lynnwood, Washington, USA",
                "lat": "47.82",
                "lon": "-122.31"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/forecast/daily"))
            .and(query_param("key", "wx"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"valid_date": "2024-01-01", "weather": {"description": "Cloudy"}}]
            })))
            .mount(&server)
            .await;

        let cache = Arc::new(CacheManager::in_memory().unwrap());
        let relay = Relay::with_cache(&config_for(&server), cache).unwrap();

        let first = relay.location.lookup("lynnwood").await.unwrap();
        let again = relay.location.lookup("lynnwood").await.unwrap();
        assert_eq!(first, again);
        assert_eq!(first.formatted_query, "Lynnwood, Washington, USA");

        let days = relay.weather.fetch("lynnwood").await.unwrap();
        assert_eq!(
            days,
            vec![WeatherDay {
                forecast: "Cloudy".into(),
                date: "2024-01-01".into()
            }]
        );
    }
}
