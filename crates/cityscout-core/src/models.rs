use cityscout_cache::CachedLocation;
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A geocoded search term, exactly as the `/location` route returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeRecord {
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: String,
    pub longitude: String,
}

impl From<CachedLocation> for GeocodeRecord {
    fn from(row: CachedLocation) -> Self {
        Self {
            search_query: row.search_query,
            formatted_query: row.formatted_query,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherDay {
    pub forecast: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Park {
    pub name: String,
    pub address: String,
    pub description: String,
    pub fee: Option<String>,
    pub url: String,
}

/// Field names follow what the front end already consumes, camelCase and all
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub overview: String,
    pub votes: u64,
    #[serde(rename = "avgVotes")]
    pub avg_votes: Number,
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    pub popularity: Number,
    #[serde(rename = "imageURL")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    pub price: Option<String>,
    pub rating: f64,
    #[serde(rename = "imgURL")]
    pub img_url: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &serde_json::Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_movie_serializes_wire_names() {
        let movie = Movie {
            title: "Dune".into(),
            overview: "Spice".into(),
            votes: 10,
            avg_votes: Number::from_f64(7.5).unwrap(),
            release_date: "2021-10-22".into(),
            popularity: Number::from(99),
            image_url: Some("https://image.tmdb.org/t/p/w500/x.jpg".into()),
        };
        let json = serde_json::to_value(&movie).unwrap();
        let text = serde_json::to_string(&movie).unwrap();

        assert_eq!(
            keys(&json),
            vec!["avgVotes", "imageURL", "overview", "popularity", "releaseDate", "title", "votes"]
        );
        assert_eq!(json["avgVotes"], 7.5);
        assert!(text.contains(r#""popularity":99,"#), "{}", text);
    }

    #[test]
    fn test_business_serializes_wire_names() {
        let business = Business {
            name: "Chowder".into(),
            price: None,
            rating: 4.5,
            img_url: "https://img".into(),
            url: "https://yelp".into(),
        };
        let json = serde_json::to_value(&business).unwrap();

        assert_eq!(keys(&json), vec!["imgURL", "name", "price", "rating", "url"]);
        assert!(json["price"].is_null());
    }

    #[test]
    fn test_geocode_record_drops_cache_timestamp() {
        let row = CachedLocation {
            search_query: "seattle".into(),
            formatted_query: "Seattle, WA".into(),
            latitude: "47.6".into(),
            longitude: "-122.3".into(),
            cached_at: 42,
        };
        let json = serde_json::to_value(GeocodeRecord::from(row)).unwrap();

        assert_eq!(
            keys(&json),
            vec!["formatted_query", "latitude", "longitude", "search_query"]
        );
    }
}
