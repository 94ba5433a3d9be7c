use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::{build_http_client, get_json, trim_base};
use crate::Result;

pub const YELP_API_BASE: &str = "https://api.yelp.com/v3";

/// Yelp Fusion business search
///
/// Unlike the other upstreams, Yelp wants the key as a bearer token.
pub struct YelpClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YelpClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, YELP_API_BASE.to_string())
    }

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

    /// Businesses near a free-text location
    pub async fn search_businesses(&self, location: &str) -> Result<Vec<YelpBusiness>> {
        let url = format!("{}/businesses/search", self.base_url);
        debug!("Searching businesses near '{}' via {}", location, url);

        let request = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("location", location)]);

        let page: YelpSearchPage = get_json(request).await?;
        Ok(page.businesses)
    }
}

#[derive(Debug, Deserialize)]
struct YelpSearchPage {
    businesses: Vec<YelpBusiness>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YelpBusiness {
    pub name: String,
    // Plenty of listings have no price tier
    pub price: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiError;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_businesses_uses_bearer_token() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/businesses/search"))
            .and(header("Authorization", "Bearer yelp-key"))
            .and(query_param("location", "Seattle"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "total": 1,
                "businesses": [{
                    "id": "abc",
                    "name": "Pike Place Chowder",
                    "price": "$$",
                    "rating": 4.5,
                    "image_url": "https://s3-media.yelp.com/chowder.jpg",
                    "url": "https://www.yelp.com/biz/pike-place-chowder"
                }]
            })))
            .mount(&mock_server)
            .await;

        let client = YelpClient::with_base_url("yelp-key".to_string(), mock_server.uri()).unwrap();
        let businesses = client.search_businesses("Seattle").await.unwrap();

        assert_eq!(businesses.len(), 1);
        assert_eq!(businesses[0].price.as_deref(), Some("$$"));
        assert_eq!(businesses[0].rating, 4.5);
    }

    #[tokio::test]
    async fn test_search_businesses_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/businesses/search"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"code": "TOKEN_MISSING"}
            })))
            .mount(&mock_server)
            .await;

        let client = YelpClient::with_base_url("expired".to_string(), mock_server.uri()).unwrap();
        let err = client.search_businesses("Seattle").await.unwrap_err();

        match err {
            ApiError::RequestFailed { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("TOKEN_MISSING"));
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }
}
