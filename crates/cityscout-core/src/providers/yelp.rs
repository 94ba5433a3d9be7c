// Yelp provider - business listings near the search term
use async_trait::async_trait;
use cityscout_api::{YelpBusiness, YelpClient};

use crate::{models::Business, providers::Provider, Result};

pub struct YelpProvider {
    client: YelpClient,
}

impl YelpProvider {
    pub fn new(client: YelpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Provider<Vec<Business>> for YelpProvider {
    async fn fetch(&self, term: &str) -> Result<Vec<Business>> {
        let businesses = self.client.search_businesses(term).await?;
        Ok(businesses.into_iter().map(yelp_to_business).collect())
    }
}

fn yelp_to_business(business: YelpBusiness) -> Business {
    Business {
        name: business.name,
        price: business.price,
        rating: business.rating,
        img_url: business.image_url,
        url: business.url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yelp_to_business() {
        let business = yelp_to_business(YelpBusiness {
            name: "Pike Place Chowder".into(),
            price: Some("$$".into()),
            rating: 4.5,
            image_url: "https://s3-media.yelp.com/chowder.jpg".into(),
            url: "https://www.yelp.com/biz/pike-place-chowder".into(),
        });

        assert_eq!(business.img_url, "https://s3-media.yelp.com/chowder.jpg");
        assert_eq!(business.price.as_deref(), Some("$$"));
    }
}
