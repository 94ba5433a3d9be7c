use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::{build_http_client, get_json, trim_base};
use crate::Result;

pub const NPS_API_BASE: &str = "https://developer.nps.gov/api/v1";

/// National Park Service directory
pub struct NpsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl NpsClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, NPS_API_BASE.to_string())
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

    /// Full-text park search
    pub async fn search_parks(&self, query: &str) -> Result<Vec<NpsPark>> {
        let url = format!("{}/parks", self.base_url);
        debug!("Searching parks for '{}' via {}", query, url);

        let request = self
            .client
            .get(&url)
            .query(&[("q", query), ("api_key", self.api_key.as_str())]);

        let page: NpsParksPage = get_json(request).await?;
        Ok(page.data)
    }
}

#[derive(Debug, Deserialize)]
struct NpsParksPage {
    data: Vec<NpsPark>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NpsPark {
    pub full_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub addresses: Vec<NpsAddress>,
    #[serde(default)]
    pub entrance_fees: Vec<NpsEntranceFee>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpsAddress {
    #[serde(default)]
    pub line1: String,
    #[serde(default)]
    pub city: String,
}

/// NPS sends the cost as a decimal string ("35.00")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpsEntranceFee {
    pub cost: String,
}
