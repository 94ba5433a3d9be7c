use std::path::{Path, PathBuf};

use cityscout_api::{
    LOCATIONIQ_API_BASE, NPS_API_BASE, TMDB_API_BASE, WEATHERBIT_API_BASE, YELP_API_BASE,
};
use serde::{Deserialize, Serialize};

/// Environment variables the relay has always been configured with.
/// They beat everything else.
const LEGACY_VARS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("DATABASE_URL", "database.path"),
    ("GEOCODE_API_KEY", "keys.geocode"),
    ("WEATHER_API_KEY", "keys.weather"),
    ("PARKS_API_KEY", "keys.parks"),
    ("MOVIE_API_KEY", "keys.movies"),
    ("YELP_API_KEY", "keys.yelp"),
];

/// Main configuration structure
///
/// Layers, lowest priority first: built-in defaults, the TOML file,
/// `CITYSCOUT__SECTION__KEY` variables, then the legacy flat variables
/// (`PORT`, `GEOCODE_API_KEY`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub keys: ApiKeys,
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Config {
    /// Load from `path`, or from the default location when none is given
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Same as [`Config::load`] but with the legacy variables read through `lookup`
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ::config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(
                    ::config::File::from(path)
                        .format(::config::FileFormat::Toml)
                        .required(true),
                );
            }
            None => {
                if let Some(default_path) = Self::config_path() {
                    builder = builder.add_source(
                        ::config::File::from(default_path.as_path())
                            .format(::config::FileFormat::Toml)
                            .required(false),
                    );
                }
            }
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("CITYSCOUT")
                .prefix_separator("__")
                .separator("__"),
        );

        for &(var, key) in LEGACY_VARS {
            builder = builder.set_override_option(key, lookup(var))?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Get the config file path
    /// Uses XDG on Linux/macOS, AppData on Windows
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cityscout").join("config.toml"))
    }

    /// Names of the API keys nobody configured
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let keys = &self.keys;
        [
            ("geocode", &keys.geocode),
            ("weather", &keys.weather),
            ("parks", &keys.parks),
            ("movies", &keys.movies),
            ("yelp", &keys.yelp),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite file holding the geocode cache
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("cityscout").join("cache.db"))
        .unwrap_or_else(|| PathBuf::from("cityscout-cache.db"))
        .to_string_lossy()
        .into_owned()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// One secret per upstream. Empty means "not configured"; the upstream
/// gets to say no.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeys {
    #[serde(default)]
    pub geocode: String,
    #[serde(default)]
    pub weather: String,
    #[serde(default)]
    pub parks: String,
    #[serde(default)]
    pub movies: String,
    #[serde(default)]
    pub yelp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_locationiq_url")]
    pub locationiq: String,
    #[serde(default = "default_weatherbit_url")]
    pub weatherbit: String,
    #[serde(default = "default_nps_url")]
    pub nps: String,
    #[serde(default = "default_tmdb_url")]
    pub tmdb: String,
    #[serde(default = "default_yelp_url")]
    pub yelp: String,
}

fn default_locationiq_url() -> String {
    LOCATIONIQ_API_BASE.to_string()
}

fn default_weatherbit_url() -> String {
    WEATHERBIT_API_BASE.to_string()
}

fn default_nps_url() -> String {
    NPS_API_BASE.to_string()
}

fn default_tmdb_url() -> String {
    TMDB_API_BASE.to_string()
}

fn default_yelp_url() -> String {
    YELP_API_BASE.to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            locationiq: default_locationiq_url(),
            weatherbit: default_weatherbit_url(),
            nps: default_nps_url(),
            tmdb: default_tmdb_url(),
            yelp: default_yelp_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HttpConfig {
    /// Outbound request timeout; unset means wait as long as the upstream takes
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_vars(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.endpoints.tmdb, "https://api.themoviedb.org/3");
        assert!(config.http.timeout_secs.is_none());
        assert_eq!(config.missing_keys().len(), 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[server]"));
        assert!(toml.contains("locationiq"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cityscout.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 8080

[database]
path = "/tmp/geo.db"

[keys]
geocode = "file-geo"
yelp = "file-yelp"

[http]
timeout_secs = 15
"#,
        )
        .unwrap();

        let config = Config::load_with(Some(path.as_path()), no_vars).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, "/tmp/geo.db");
        assert_eq!(config.keys.geocode, "file-geo");
        assert_eq!(config.http.timeout_secs, Some(15));
        assert_eq!(config.missing_keys(), vec!["weather", "parks", "movies"]);
    }

    #[test]
    fn test_legacy_vars_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cityscout.toml");
        std::fs::write(&path, "[keys]\ngeocode = \"file-geo\"\n").unwrap();

        let vars: HashMap<&str, &str> = [
            ("PORT", "4000"),
            ("GEOCODE_API_KEY", "env-geo"),
            ("MOVIE_API_KEY", "env-movies"),
        ]
        .into_iter()
        .collect();

        let config =
            Config::load_with(Some(path.as_path()), |name| vars.get(name).map(|v| v.to_string())).unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.keys.geocode, "env-geo");
        assert_eq!(config.keys.movies, "env-movies");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");

        assert!(Config::load_with(Some(path.as_path()), no_vars).is_err());
    }
}
