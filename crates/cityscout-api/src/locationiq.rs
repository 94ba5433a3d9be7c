use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::{build_http_client, get_json, trim_base};
use crate::Result;

pub const LOCATIONIQ_API_BASE: &str = "https://us1.locationiq.com/v1";

/// Forward geocoding through LocationIQ
pub struct LocationIqClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl LocationIqClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, LOCATIONIQ_API_BASE.to_string())
    }

    /// For regional endpoints (eu1, ...) or testing against a stub
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        Ok(Self::with_client(build_http_client(None)?, api_key, base_url))
    }

    pub fn with_client(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: trim_base(base_url),
        }
    }

    /// Look up a free-text place name, best match only
    pub async fn search(&self, query: &str) -> Result<Vec<LocationIqPlace>> {
        let url = format!("{}/search.php", self.base_url);
        debug!("Geocoding '{}' via {}", query, url);

        let request = self.client.get(&url).query(&[
            ("key", self.api_key.as_str()),
            ("q", query),
            ("format", "json"),
            ("limit", "1"),
        ]);

        get_json(request).await
    }
}

/// One LocationIQ search hit. Coordinates arrive as strings and stay that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationIqPlace {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_sends_key_and_encoded_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .and(query_param("key", "geo-key"))
            .and(query_param("q", "Salt Lake City & more"))
            .and(query_param("format", "json"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "place_id": "1",
                "display_name": "Salt Lake City, Utah, USA",
                "lat": "40.7596198",
                "lon": "-111.886797"
            }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            LocationIqClient::with_base_url("geo-key".to_string(), mock_server.uri()).unwrap();
        let places = client.search("Salt Lake City & more").await.unwrap();

        assert_eq!(places.len(), 1);
        assert_eq!(places[0].display_name, "Salt Lake City, Utah, USA");
        assert_eq!(places[0].lat, "40.7596198");
        assert_eq!(places[0].lon, "-111.886797");
    }

    #[tokio::test]
    async fn test_search_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid key"))
            .mount(&mock_server)
            .await;

        let client = LocationIqClient::with_base_url("bad".to_string(), mock_server.uri()).unwrap();
        let err = client.search("Seattle").await.unwrap_err();

        match err {
            ApiError::RequestFailed { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "Invalid key");
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_unexpected_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.php"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "nope"})),
            )
            .mount(&mock_server)
            .await;

        let client = LocationIqClient::with_base_url("k".to_string(), mock_server.uri()).unwrap();
        let err = client.search("Seattle").await.unwrap_err();

        assert!(matches!(err, ApiError::ParseError(_)));
    }
}
