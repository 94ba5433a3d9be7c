use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

use crate::http::{build_http_client, get_json, trim_base};
use crate::Result;

pub const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// The Movie Database search
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, TMDB_API_BASE.to_string())
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

    /// Movies whose title matches the query (first results page)
    pub async fn search_movies(&self, query: &str) -> Result<Vec<TmdbMovie>> {
        let url = format!("{}/search/movie", self.base_url);
        debug!("Searching movies for '{}' via {}", query, url);

        let request = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)]);

        let page: TmdbSearchPage = get_json(request).await?;
        Ok(page.results)
    }
}

#[derive(Debug, Deserialize)]
struct TmdbSearchPage {
    results: Vec<TmdbMovie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbMovie {
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_count: u64,
    // Numbers stay as TMDB wrote them: 99 does not become 99.0
    #[serde(default = "zero")]
    pub vote_average: Number,
    // Unreleased titles come back with "" or no date at all
    #[serde(default)]
    pub release_date: String,
    #[serde(default = "zero")]
    pub popularity: Number,
    pub poster_path: Option<String>,
}

fn zero() -> Number {
    Number::from(0)
}
