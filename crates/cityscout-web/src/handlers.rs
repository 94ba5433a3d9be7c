//! Route handlers.
//!
//! Query parameters are taken as-is: a missing term becomes the empty
//! string and goes upstream like any other.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cityscout_core::{Business, GeocodeRecord, Movie, Park, Provider, WeatherDay};
use serde::Deserialize;

use crate::{AppError, AppState};

pub(crate) const HOME_TEXT: &str = "Available Routes:\n\
/location?city=<name>\n\
/weather?search_query=<name>\n\
/parks?search_query=<name>\n\
/movies?search_query=<name>\n\
/yelp?city=<name>\n";

pub(crate) const ROUTE_ERROR_TEXT: &str = "Route Error - Page is not found!";

/// `?city=` parameter used by `/location` and `/yelp`.
#[derive(Debug, Deserialize)]
pub struct CityParams {
    #[serde(default)]
    pub city: String,
}

/// `?search_query=` parameter used by `/weather`, `/parks` and `/movies`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search_query: String,
}

pub async fn home() -> &'static str {
    HOME_TEXT
}

pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, ROUTE_ERROR_TEXT)
}

pub async fn location(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Result<Json<GeocodeRecord>, AppError> {
    let record = state.relay.location.lookup(&params.city).await?;
    Ok(Json(record))
}

pub async fn weather(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<WeatherDay>>, AppError> {
    let days = state.relay.weather.fetch(&params.search_query).await?;
    Ok(Json(days))
}

pub async fn parks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Park>>, AppError> {
    let parks = state.relay.parks.fetch(&params.search_query).await?;
    Ok(Json(parks))
}

pub async fn movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.relay.movies.fetch(&params.search_query).await?;
    Ok(Json(movies))
}

pub async fn yelp(
    State(state): State<AppState>,
    Query(params): Query<CityParams>,
) -> Result<Json<Vec<Business>>, AppError> {
    let businesses = state.relay.businesses.fetch(&params.city).await?;
    Ok(Json(businesses))
}
