// TMDB provider - movie search results with absolute poster URLs
use async_trait::async_trait;
use cityscout_api::{TmdbClient, TmdbMovie};

use crate::{models::Movie, providers::Provider, Result};

const TMDB_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub struct TmdbProvider {
    client: TmdbClient,
}

impl TmdbProvider {
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Provider<Vec<Movie>> for TmdbProvider {
    async fn fetch(&self, term: &str) -> Result<Vec<Movie>> {
        let movies = self.client.search_movies(term).await?;
        Ok(movies.into_iter().map(tmdb_to_movie).collect())
    }
}

fn tmdb_to_movie(movie: TmdbMovie) -> Movie {
    Movie {
        title: movie.title,
        overview: movie.overview,
        votes: movie.vote_count,
        avg_votes: movie.vote_average,
        release_date: movie.release_date,
        popularity: movie.popularity,
        image_url: movie
            .poster_path
            .map(|poster| format!("{}{}", TMDB_POSTER_BASE, poster)),
    }
}
