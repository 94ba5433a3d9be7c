// LocationIQ provider - turns the best search hit into a GeocodeRecord
use async_trait::async_trait;
use cityscout_api::{ApiError, LocationIqClient, LocationIqPlace};

use crate::{models::GeocodeRecord, providers::Provider, Error, Result};

pub struct LocationIqProvider {
    client: LocationIqClient,
}

impl LocationIqProvider {
    pub fn new(client: LocationIqClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Provider<GeocodeRecord> for LocationIqProvider {
    async fn fetch(&self, term: &str) -> Result<GeocodeRecord> {
        // LocationIQ says "Unable to geocode" with a 404 rather than an empty list
        let places = match self.client.search(term).await {
            Ok(places) => places,
            Err(ApiError::RequestFailed { status: 404, .. }) => {
                return Err(Error::NotFound(term.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        places
            .into_iter()
            .next()
            .map(|place| place_to_record(term, place))
            .ok_or_else(|| Error::NotFound(term.to_string()))
    }
}

/// The record is keyed by what the caller typed, not by what LocationIQ echoed back
fn place_to_record(term: &str, place: LocationIqPlace) -> GeocodeRecord {
    GeocodeRecord {
        search_query: term.to_string(),
        formatted_query: place.display_name,
        latitude: place.lat,
        longitude: place.lon,
    }
}
