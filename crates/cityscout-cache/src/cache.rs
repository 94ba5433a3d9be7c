use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Could not prepare cache directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache connection poisoned by a panicked writer")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, CacheError>;

/// A geocoding answer as it sits in the `location` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedLocation {
    pub search_query: String,
    pub formatted_query: String,
    pub latitude: String,
    pub longitude: String,
    /// Unix seconds of the first write; informational only, nothing expires
    pub cached_at: i64,
}

impl CachedLocation {
    /// A row stamped with the current time
    pub fn new(
        search_query: String,
        formatted_query: String,
        latitude: String,
        longitude: String,
    ) -> Self {
        Self {
            search_query,
            formatted_query,
            latitude,
            longitude,
            cached_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Cache manager using SQLite
///
/// Opened once at startup and shared by every request. rusqlite's
/// `Connection` is not `Sync`, so it lives behind a mutex; each operation
/// holds the lock for a single statement or two.
pub struct CacheManager {
    conn: Mutex<Connection>,
}

impl CacheManager {
    /// Open (or create) the cache at `db_path`. `":memory:"` gives a throwaway store.
    pub fn new(db_path: &str) -> Result<Self> {
        if db_path != ":memory:" {
            if let Some(parent) = Path::new(db_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let conn = Connection::open(db_path)?;

        // Initialize schema on first run
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::new(":memory:")
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        // UNIQUE lets two racing first-time lookups collapse onto one row
        conn.execute(
            "CREATE TABLE IF NOT EXISTS location (
                id INTEGER PRIMARY KEY,
                search_query TEXT NOT NULL UNIQUE,
                formatted_query TEXT NOT NULL,
                latitude TEXT NOT NULL,
                longitude TEXT NOT NULL,
                cached_at INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| CacheError::Poisoned)
    }

    /// Exact-match lookup; no case folding, no trimming
    pub fn get_location(&self, search_query: &str) -> Result<Option<CachedLocation>> {
        let conn = self.conn()?;
        Self::select(&conn, search_query)
    }

    /// Store a fresh answer and hand back whatever row now owns that key
    ///
    /// If another request got there first, its row wins and is returned
    /// unchanged.
    pub fn insert_location(&self, location: &CachedLocation) -> Result<CachedLocation> {
        let conn = self.conn()?;

        let inserted = conn.execute(
            "INSERT INTO location (search_query, formatted_query, latitude, longitude, cached_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(search_query) DO NOTHING",
            params![
                location.search_query,
                location.formatted_query,
                location.latitude,
                location.longitude,
                location.cached_at,
            ],
        )?;

        if inserted == 0 {
            debug!("'{}' was already cached, keeping the existing row", location.search_query);
        }

        Self::select(&conn, &location.search_query)?
            .ok_or(CacheError::Database(rusqlite::Error::QueryReturnedNoRows))
    }

    /// Number of cached search strings
    pub fn count(&self) -> Result<u64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM location", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn select(conn: &Connection, search_query: &str) -> Result<Option<CachedLocation>> {
        let row = conn
            .query_row(
                "SELECT search_query, formatted_query, latitude, longitude, cached_at
                 FROM location WHERE search_query = ?1",
                params![search_query],
                |row| {
                    Ok(CachedLocation {
                        search_query: row.get(0)?,
                        formatted_query: row.get(1)?,
                        latitude: row.get(2)?,
                        longitude: row.get(3)?,
                        cached_at: row.get(4)?,
                    })
                },
            )
            .optional()?;

        Ok(row)
    }
}
