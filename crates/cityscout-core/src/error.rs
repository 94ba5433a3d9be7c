use cityscout_api::ApiError;
use cityscout_cache::CacheError;
use thiserror::Error;

/// All the ways a lookup can go wrong
///
/// Upstream, store and shape failures all end up as a 500 at the HTTP
/// boundary; `NotFound` is the one case that gets its own answer.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Upstream request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Cache operation failed: {0}")]
    Cache(#[from] CacheError),

    #[error("Cache task did not finish: {0}")]
    CacheTask(#[from] tokio::task::JoinError),

    #[error("No results found for '{0}'")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
